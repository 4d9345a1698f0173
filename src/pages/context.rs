//! Per-request context handed to page data loaders.

use std::collections::HashMap;

use axum::http::HeaderMap;

use crate::i18n::{split_language_prefix, Language};

#[derive(Debug, Clone)]
pub struct PageContext {
    /// Original request target, query included.
    pub url: String,
    /// Path with any language prefix removed.
    pub path: String,
    pub query: HashMap<String, String>,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
    pub language: Language,
}

impl PageContext {
    /// Build a context from a request target such as `/en-US/about?tab=team`.
    pub fn new(url: &str, language: Language) -> Self {
        // A leading `//` is part of the path, never an authority.
        let target = url.split('#').next().unwrap_or_default();
        let (raw_path, query_string) = target.split_once('?').unwrap_or((target, ""));
        let query = url::form_urlencoded::parse(query_string.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let (_, path) = split_language_prefix(raw_path);

        Self {
            url: url.to_string(),
            path: path.to_string(),
            query,
            user_agent: String::new(),
            headers: HashMap::new(),
            language,
        }
    }

    /// Attach request headers; the user agent is lifted out for convenience.
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        self.headers = headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        self.user_agent = self.headers.get("user-agent").cloned().unwrap_or_default();
        self
    }
}
