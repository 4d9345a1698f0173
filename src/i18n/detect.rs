//! Request-time language resolution.
//!
//! Precedence: URL path prefix > language cookie > `Accept-Language` > default.

use serde::Serialize;

use crate::i18n::accept_language::negotiate;
use crate::i18n::cookie::parse_cookies;
use crate::i18n::Language;

/// Where a resolved language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    PathPrefix,
    Cookie,
    AcceptLanguage,
    Default,
}

impl DetectionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionSource::PathPrefix => "path-prefix",
            DetectionSource::Cookie => "cookie",
            DetectionSource::AcceptLanguage => "accept-language",
            DetectionSource::Default => "default",
        }
    }
}

/// A resolved language and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    pub source: DetectionSource,
}

/// Request inputs consulted by [`detect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageHints<'a> {
    pub path: &'a str,
    pub cookie_header: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

/// Split a leading `/xx-YY` language segment off a path.
///
/// Only supported codes are recognized; anything else leaves the path
/// untouched. The remainder is `/` when nothing follows the prefix.
pub fn split_language_prefix(path: &str) -> (Option<Language>, &str) {
    let Some(rest) = path.strip_prefix('/') else {
        return (None, path);
    };
    let (segment, tail) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    match segment.parse::<Language>() {
        Ok(lang) if tail.is_empty() => (Some(lang), "/"),
        Ok(lang) => (Some(lang), tail),
        Err(_) => (None, path),
    }
}

/// Resolve the language of a request.
pub fn detect(hints: LanguageHints<'_>, cookie_name: &str, default: Language) -> Detection {
    if let (Some(language), _) = split_language_prefix(hints.path) {
        return Detection {
            language,
            source: DetectionSource::PathPrefix,
        };
    }

    if let Some(header) = hints.cookie_header {
        let cookies = parse_cookies(header);
        if let Some(language) = cookies.get(cookie_name).and_then(|v| v.parse().ok()) {
            return Detection {
                language,
                source: DetectionSource::Cookie,
            };
        }
    }

    if let Some(language) = hints.accept_language.and_then(negotiate) {
        return Detection {
            language,
            source: DetectionSource::AcceptLanguage,
        };
    }

    Detection {
        language: default,
        source: DetectionSource::Default,
    }
}
