//! Page-shell rendering.
//!
//! # Data Flow
//! ```text
//! template.rs (cached or re-read per request)
//!     + shell.rs head (title, description, hreflang links)
//!     + shell.rs body (server markup, nav, language switcher, state scripts via escape.rs)
//!     → Template::render → HTML document
//! ```

pub mod escape;
pub mod shell;
pub mod template;

use std::path::PathBuf;

use thiserror::Error;

pub use shell::{language_links, nav_links, render_body, render_head, state_script, NavLink, ShellContext};
pub use template::{Template, TemplateSource};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),
    #[error("failed to serialize page state")]
    Serialize(#[from] serde_json::Error),
}
