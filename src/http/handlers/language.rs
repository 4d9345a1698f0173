//! `POST /api/language`: persist a language choice in the language cookie.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::i18n::{language_cookie, Language};
use crate::observability::metrics;

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub success: bool,
    pub language: Language,
}

pub async fn set_language(
    State(state): State<AppState>,
    payload: Result<Json<LanguageRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let requested = match payload {
        Ok(Json(body)) => body.language,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected language payload");
            None
        }
    };

    let language: Language = requested
        .as_deref()
        .and_then(|code| code.parse().ok())
        .ok_or(AppError::InvalidLanguage)?;

    let shared = state.load();
    let cookie = language_cookie(language, &shared.config.i18n.cookie);

    metrics::record_language_switch(language);
    tracing::info!(language = %language, "Language switched");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LanguageResponse {
            success: true,
            language,
        }),
    )
        .into_response())
}
