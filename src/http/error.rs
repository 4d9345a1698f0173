//! Error types of the HTTP layer.

use std::error::Error as _;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::i18n::catalog::CatalogError;
use crate::render::RenderError;

/// Failures while building the server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failures surfaced to clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid language")]
    InvalidLanguage,
    #[error("Page not found")]
    PageNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("page render failed")]
    Render {
        #[source]
        source: RenderError,
        /// Include the error chain in the response body.
        expose: bool,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidLanguage => StatusCode::BAD_REQUEST,
            AppError::PageNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `error: cause: cause...` for every source in the chain.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Render { ref source, expose } => {
                tracing::error!(error = %error_chain(&self), "Render failed");
                let body = if expose {
                    error_chain(source)
                } else {
                    "Internal Server Error".to_string()
                };
                (status, body).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
