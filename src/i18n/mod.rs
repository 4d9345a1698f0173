//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! Request (path, Cookie, Accept-Language)
//!     → detect.rs (precedence: path prefix > cookie > header > default)
//!         → cookie.rs (Cookie header parsing)
//!         → accept_language.rs (q-ranking, subtag matching)
//!     → Language
//!     → catalog.rs (translated strings)
//!     → hreflang.rs (alternate/canonical links)
//! ```
//!
//! # Design Decisions
//! - The supported set is a closed enum; every resolved value is valid
//! - Unmatched input never errors, it falls through to the next source

pub mod accept_language;
pub mod catalog;
pub mod cookie;
pub mod detect;
pub mod hreflang;
pub mod language;

pub use catalog::Catalog;
pub use cookie::{language_cookie, parse_cookies};
pub use detect::{detect, split_language_prefix, Detection, DetectionSource, LanguageHints};
pub use language::{Language, UnsupportedLanguage};
