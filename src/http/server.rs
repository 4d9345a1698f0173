//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: language API, page-data API, health, assets, page shell
//! - Wire up middleware (request ID, tracing, security headers, limits, timeout)
//! - Hold hot-reloadable state behind an `ArcSwap`
//! - Serve until the shutdown signal, then drain in-flight requests
//!
//! # Design Decisions
//! - The catalog is loaded once; config-derived state is swapped atomically
//! - Layer stack is fixed at startup: limits, timeouts and the asset mount
//!   only change on restart

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::http::error::StartupError;
use crate::http::handlers::{page_data, render_page, set_language};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::i18n::Catalog;
use crate::pages::PageLoader;
use crate::render::TemplateSource;
use crate::security::headers::security_headers;

/// Everything derived from the current configuration.
pub struct SharedState {
    pub config: SiteConfig,
    pub loader: PageLoader,
    pub template: TemplateSource,
}

impl SharedState {
    fn build(config: SiteConfig, catalog: Arc<Catalog>) -> Result<Self, StartupError> {
        let template = TemplateSource::from_config(
            config.render.template_path.as_deref(),
            config.render.reload_template,
        )?;
        let loader = PageLoader::new(catalog, &config.pages);
        Ok(Self {
            config,
            loader,
            template,
        })
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<ArcSwap<SharedState>>,
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: Arc<Catalog>) -> Result<Self, StartupError> {
        let shared = SharedState::build(config, catalog.clone())?;
        Ok(Self {
            inner: Arc::new(ArcSwap::from_pointee(shared)),
            catalog,
        })
    }

    /// Snapshot of the current state. Stays valid across a concurrent reload.
    pub fn load(&self) -> Arc<SharedState> {
        self.inner.load_full()
    }

    /// Swap in state built from `config`. On failure the current state is kept.
    pub fn reload(&self, config: SiteConfig) {
        match SharedState::build(config, self.catalog.clone()) {
            Ok(shared) => {
                tracing::info!(
                    default_language = %shared.config.i18n.default_language,
                    template = ?shared.config.render.template_path,
                    "Configuration reloaded"
                );
                self.inner.store(Arc::new(shared));
            }
            Err(e) => {
                tracing::error!(error = %e, "Rejected config update. Keeping current configuration.");
            }
        }
    }
}

/// HTTP server for the page shell.
pub struct HttpServer {
    router: Router,
    state: AppState,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, StartupError> {
        let catalog = Arc::new(Catalog::bundled()?);
        Self::with_catalog(config, catalog)
    }

    /// Create a server over an already-loaded catalog.
    pub fn with_catalog(config: SiteConfig, catalog: Arc<Catalog>) -> Result<Self, StartupError> {
        let state = AppState::new(config.clone(), catalog)?;
        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            state,
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/api/language", post(set_language))
            .route("/api/page-data", get(page_data))
            .route("/health", get(health));

        if let Some(dir) = &config.render.assets_dir {
            tracing::info!(dir = %dir, base = %config.render.assets_base, "Serving static assets");
            router = router.nest_service(&config.render.assets_base, ServeDir::new(dir));
        }

        let router = router
            .fallback(render_page)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

        let router = if config.security.enable_headers {
            security_headers(router)
        } else {
            router
        };

        // Outermost first: the ID exists before the span is created.
        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(propagate_request_id_layer()),
        )
    }

    /// The fully layered router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the hot-reloadable state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the startup config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Config updates arriving on `config_updates` are applied without a
    /// restart. Returns once `shutdown` fires and in-flight requests drain.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        let updates = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                state.reload(config);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        updates.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
