//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ssr_requests_total` (counter): HTML and API requests by kind, status
//! - `ssr_render_duration_seconds` (histogram): page render latency
//! - `ssr_language_detections_total` (counter): resolved language by source
//! - `ssr_language_switches_total` (counter): accepted language changes
//! - `ssr_page_cache_total` (counter): revalidate cache lookups by result
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Labels are bounded (language codes, route paths from the static table)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::i18n::{Detection, Language};
use crate::pages::PageRoute;

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(kind: &'static str, status: u16, start: Instant) {
    counter!("ssr_requests_total", "kind" => kind, "status" => status.to_string()).increment(1);
    if kind == "page" {
        histogram!("ssr_render_duration_seconds").record(start.elapsed().as_secs_f64());
    }
}

pub fn record_detection(detection: Detection) {
    counter!(
        "ssr_language_detections_total",
        "language" => detection.language.code(),
        "source" => detection.source.as_str()
    )
    .increment(1);
}

pub fn record_language_switch(language: Language) {
    counter!("ssr_language_switches_total", "language" => language.code()).increment(1);
}

pub fn record_page_cache(route: PageRoute, hit: bool) {
    counter!(
        "ssr_page_cache_total",
        "route" => route.path(),
        "result" => if hit { "hit" } else { "miss" }
    )
    .increment(1);
}
