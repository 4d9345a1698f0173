//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (request ID, trace span)
//!     → handlers/language.rs   POST /api/language
//!     → handlers/page_data.rs  GET  /api/page-data
//!     → handlers/page.rs       everything else (HTML shell)
//!     → error.rs (status + body for failures)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::{AppError, StartupError};
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer, SharedState};
