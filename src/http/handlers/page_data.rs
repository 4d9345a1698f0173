//! `GET /api/page-data`: client-side fallback fetch of a page's initial data.
//!
//! Used after hydration when the server skipped the page's data and on
//! client-side navigation.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::error::AppError;
use crate::http::server::AppState;
use crate::i18n::{detect, LanguageHints};
use crate::observability::metrics;
use crate::pages::{LoadOutcome, PageContext, PageData};

#[derive(Debug, Deserialize)]
pub struct PageDataQuery {
    /// Page path, optionally language-prefixed, with its own query string.
    pub path: Option<String>,
}

pub async fn page_data(
    State(state): State<AppState>,
    Query(query): Query<PageDataQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let shared = state.load();
    let i18n = &shared.config.i18n;

    let path = query.path.unwrap_or_else(|| "/".to_string());
    let detection = detect(
        LanguageHints {
            path: &path,
            cookie_header: headers.get(COOKIE).and_then(|v| v.to_str().ok()),
            accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
        },
        &i18n.cookie.name,
        i18n.default_language,
    );
    metrics::record_detection(detection);

    let ctx = PageContext::new(&path, detection.language).with_headers(&headers);
    let result = match shared.loader.load_for_client(&ctx).await {
        LoadOutcome::Data(data) => Ok(Json(data).into_response()),
        LoadOutcome::Redirect {
            destination,
            permanent,
        } => Ok(Json(json!({
            "redirect": { "destination": destination, "permanent": permanent }
        }))
        .into_response()),
        LoadOutcome::Skipped(route) => Ok(Json(PageData {
            route: route.path().to_string(),
            props: json!({}),
            revalidate: None,
            client_generated: true,
        })
        .into_response()),
        LoadOutcome::NotFound | LoadOutcome::Unmatched => Err(AppError::PageNotFound),
    };

    let status = match &result {
        Ok(response) => response.status().as_u16(),
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request("page-data", status, start);
    result
}
