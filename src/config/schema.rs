//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Root configuration for the page-shell server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Language negotiation and cookie settings.
    pub i18n: I18nConfig,

    /// HTML template and asset settings.
    pub render: RenderConfig,

    /// Initial-data loading settings.
    pub pages: PagesConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5173").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5173".to_string(),
        }
    }
}

/// Language negotiation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used when nothing in the request selects one.
    pub default_language: Language,

    /// Public site origin used for hreflang and canonical links.
    pub base_url: String,

    /// Site name appended to page titles.
    pub site_name: String,

    /// Language cookie attributes.
    pub cookie: CookieConfig,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            base_url: "http://localhost:5173".to_string(),
            site_name: "Vite React SSR".to_string(),
            cookie: CookieConfig::default(),
        }
    }
}

/// Attributes of the language cookie.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie name.
    pub name: String,

    /// Cookie path.
    pub path: String,

    /// Max-Age in seconds.
    pub max_age_secs: u64,

    /// Emit the `Secure` attribute.
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "i18next-lng".to_string(),
            path: "/".to_string(),
            max_age_secs: 365 * 24 * 60 * 60, // 1 year
            secure: false,
        }
    }
}

/// Page-shell rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path to the HTML template. The built-in shell is used when unset.
    pub template_path: Option<String>,

    /// Re-read the template on every request (development mode).
    pub reload_template: bool,

    /// Return the error chain in 500 responses.
    ///
    /// Off by default: render failures answer with a generic
    /// `Internal Server Error` body and the chain goes to the log only.
    /// Turn it on in development to see the failure in the response.
    pub expose_errors: bool,

    /// Directory of built client assets to serve.
    pub assets_dir: Option<String>,

    /// URL prefix the assets are served under.
    pub assets_base: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_path: None,
            reload_template: false,
            expose_errors: false,
            assets_dir: None,
            assets_base: "/assets".to_string(),
        }
    }
}

/// Initial-data loading configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Simulated latency of the mock data source in milliseconds.
    pub fetch_latency_ms: u64,

    /// Cache payloads of pages that declare a revalidate interval.
    pub cache_enabled: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 100,
            cache_enabled: true,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Grace period for in-flight requests on shutdown, in seconds.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}
