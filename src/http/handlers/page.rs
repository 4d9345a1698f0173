//! Catch-all HTML route: resolve language, load initial data, render the shell.

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, VARY};
use axum::http::request::Parts;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::error::AppError;
use crate::http::request::RequestIdExt;
use crate::http::server::{AppState, SharedState};
use crate::i18n::hreflang::{alternate_links, localized_url};
use crate::i18n::{detect, parse_cookies, Detection, DetectionSource, LanguageHints};
use crate::observability::metrics;
use crate::pages::{LoadOutcome, PageContext};
use crate::render::{language_links, nav_links, render_body, render_head, RenderError, ShellContext};
use crate::stores::{InitialState, THEME_COOKIE};

pub async fn render_page(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let shared = state.load();

    let (parts, _body) = request.into_parts();

    let mut response = if matches!(parts.method, Method::GET | Method::HEAD) {
        render(&shared, &parts).await.unwrap_or_else(|source| {
            AppError::Render {
                source,
                expose: shared.config.render.expose_errors,
            }
            .into_response()
        })
    } else {
        AppError::MethodNotAllowed.into_response()
    };
    // HEAD keeps the GET headers and drops the body.
    if parts.method == Method::HEAD {
        *response.body_mut() = Body::empty();
    }

    metrics::record_request("page", response.status().as_u16(), start);
    response
}

async fn render(shared: &SharedState, request: &Parts) -> Result<Response, RenderError> {
    let config = &shared.config;
    let headers = &request.headers;
    let url = request
        .uri
        .path_and_query()
        .map_or_else(|| request.uri.path().to_string(), |pq| pq.as_str().to_string());
    let cookie_header = headers.get(COOKIE).and_then(|v| v.to_str().ok());

    let detection = detect(
        LanguageHints {
            path: request.uri.path(),
            cookie_header,
            accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
        },
        &config.i18n.cookie.name,
        config.i18n.default_language,
    );
    metrics::record_detection(detection);
    let language = detection.language;

    tracing::debug!(
        request_id = %headers.request_id(),
        url = %url,
        language = %language,
        source = detection.source.as_str(),
        "Rendering page"
    );

    let ctx = PageContext::new(&url, language).with_headers(headers);
    let (status, page_data) = match shared.loader.load_for_ssr(&ctx).await {
        LoadOutcome::Data(data) => (StatusCode::OK, Some(data)),
        LoadOutcome::Skipped(_) => (StatusCode::OK, None),
        LoadOutcome::Redirect {
            destination,
            permanent,
        } => return Ok(redirect(&destination, permanent, detection)),
        LoadOutcome::NotFound | LoadOutcome::Unmatched => (
            StatusCode::NOT_FOUND,
            Some(shared.loader.not_found_data(language)),
        ),
    };

    let theme = cookie_header
        .map(parse_cookies)
        .and_then(|cookies| cookies.get(THEME_COOKIE).and_then(|t| t.parse().ok()));
    let initial_state = InitialState::for_request(&ctx.user_agent, theme);
    let links = alternate_links(
        &config.i18n.base_url,
        &ctx.path,
        language,
        config.i18n.default_language,
    );
    let catalog = shared.loader.catalog();
    let description = catalog.t(language, "site.description");
    let nav = nav_links(catalog, language, &ctx.path);
    let languages = language_links(&ctx.path, language);

    let shell = ShellContext {
        language,
        site_name: &config.i18n.site_name,
        description: &description,
        links: &links,
        page_data: page_data.as_ref(),
        state: &initial_state,
        nav: &nav,
        languages: &languages,
    };

    let template = shared.template.load().await?;
    let html = template.render(&render_head(&shell), &render_body(&shell)?, language);

    Ok((
        status,
        [
            (CONTENT_TYPE, "text/html; charset=utf-8"),
            (CONTENT_LANGUAGE, language.code()),
            (VARY, "Cookie, Accept-Language"),
        ],
        html,
    )
        .into_response())
}

/// Redirect, keeping the language prefix when the request carried one.
fn redirect(destination: &str, permanent: bool, detection: Detection) -> Response {
    let location = if detection.source == DetectionSource::PathPrefix && destination.starts_with('/') {
        localized_url("", detection.language, destination)
    } else {
        destination.to_string()
    };
    let status = if permanent {
        StatusCode::PERMANENT_REDIRECT
    } else {
        StatusCode::TEMPORARY_REDIRECT
    };
    (status, [(LOCATION, location)]).into_response()
}
