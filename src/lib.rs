//! Server side of a server-rendered, localized single-page app.

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod render;
pub mod security;
pub mod stores;

pub use config::schema::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
