//! SSR shell server
//!
//! Serves a localized single-page app: picks a language per request, loads
//! the page's initial data, and renders the HTML shell the client hydrates.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ i18n::detect ──▶ pages::loader ──▶ render::shell
//!                         │                (path, cookie,     (props, cache)     (template,
//!                         │                 Accept-Language)                      state scripts)
//!                         ├──▶ POST /api/language  (language cookie)
//!                         └──▶ GET  /api/page-data (client fallback)
//!
//!     Cross-cutting: config (+ hot reload), observability, security headers, lifecycle
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use ssr_shell::config::{load_config, ConfigWatcher};
use ssr_shell::lifecycle::spawn_signal_handler;
use ssr_shell::observability::{logging, metrics};
use ssr_shell::{HttpServer, Shutdown, SiteConfig};

#[derive(Parser)]
#[command(name = "ssr-shell")]
#[command(about = "Localized SSR page-shell server", long_about = None)]
struct Cli {
    /// TOML config file. Watched for changes when given.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ssr-shell starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        default_language = %config.i18n.default_language,
        template = ?config.render.template_path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // The watcher must outlive the server.
    let (_watcher, config_updates) = match &cli.config {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_tx, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_handler(&shutdown);

    let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);
    let server = HttpServer::new(config)?;
    let serve = server.run(listener, config_updates, shutdown.subscribe());
    if let Some(result) = shutdown.drain(serve, grace).await {
        result?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
