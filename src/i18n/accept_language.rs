//! `Accept-Language` parsing and matching against supported languages.

use crate::i18n::Language;

/// One language range from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    pub tag: String,
    pub quality: f32,
}

/// Parse an `Accept-Language` header into ranges ordered by preference.
///
/// A missing or unparseable `q` counts as 1.0; values are clamped to
/// `[0, 1]`. Ranges with `q=0` are refusals and are dropped. Equal
/// qualities keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header
        .split(',')
        .filter_map(|part| {
            let mut segments = part.split(';');
            let tag = segments.next().unwrap_or("").trim();
            if tag.is_empty() {
                return None;
            }

            let mut quality = 1.0_f32;
            for param in segments {
                let param = param.trim();
                if let Some(value) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
                    quality = match value.trim().parse::<f32>() {
                        Ok(q) if q.is_finite() => q.clamp(0.0, 1.0),
                        _ => 1.0,
                    };
                }
            }

            (quality > 0.0).then(|| LanguageRange {
                tag: tag.to_string(),
                quality,
            })
        })
        .collect();

    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    ranges
}

/// Map a language tag onto a supported language.
///
/// Exact codes match first (case-insensitively), then the primary subtag:
/// `en` and `en-GB` select `en-US`, `zh-TW` selects `zh-CN`.
pub fn match_language(tag: &str) -> Option<Language> {
    if let Some(lang) = Language::ALL
        .into_iter()
        .find(|lang| lang.code().eq_ignore_ascii_case(tag))
    {
        return Some(lang);
    }

    let primary = tag.split(['-', '_']).next().unwrap_or("");
    Language::ALL
        .into_iter()
        .find(|lang| lang.primary_subtag().eq_ignore_ascii_case(primary))
}

/// Pick the most preferred supported language from an `Accept-Language` header.
pub fn negotiate(header: &str) -> Option<Language> {
    parse_accept_language(header)
        .iter()
        .find_map(|range| match_language(&range.tag))
}
