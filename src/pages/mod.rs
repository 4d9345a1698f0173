//! Page table and initial-data loading.
//!
//! # Data Flow
//! ```text
//! Request path (language prefix stripped)
//!     → route.rs (normalize, exact match on the static table)
//!     → cache.rs (reuse a payload still inside its revalidate window)
//!     → props.rs (page hook: canned content, mock fetches via fetch.rs)
//!     → loader.rs (map to LoadOutcome: data / redirect / not found / skipped)
//! ```
//!
//! # Design Decisions
//! - Load failures never fail the render; the page ships without data and
//!   the client fetches it after hydration
//! - Client-only pages are skipped on the server on purpose

pub mod cache;
pub mod context;
pub mod fetch;
pub mod loader;
pub mod props;
pub mod route;

use thiserror::Error;

pub use cache::PageCache;
pub use context::PageContext;
pub use fetch::DataSource;
pub use loader::{LoadOutcome, PageData, PageLoader};
pub use props::InitialProps;
pub use route::{normalize_path, PageRoute};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown data endpoint '{0}'")]
    UnknownEndpoint(String),
}
