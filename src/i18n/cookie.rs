//! Cookie header parsing and the language `Set-Cookie` value.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::CookieConfig;
use crate::i18n::Language;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parse a `Cookie` request header into name/value pairs.
///
/// Pairs without a name or value are skipped. Values are percent-decoded
/// when they decode to valid UTF-8 and kept verbatim otherwise. The first
/// occurrence of a name wins.
pub fn parse_cookies(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for pair in header.split(';') {
        let Some((name, value)) = pair.trim().split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim().trim_matches('"');
        if name.is_empty() || value.is_empty() {
            continue;
        }

        let value = percent_decode_str(value)
            .decode_utf8()
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string());

        cookies.entry(name.to_string()).or_insert(value);
    }

    cookies
}

/// Build the `Set-Cookie` header value persisting a language choice.
pub fn language_cookie(language: Language, config: &CookieConfig) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; SameSite=Strict",
        config.name,
        utf8_percent_encode(language.code(), COMPONENT),
        config.path,
        config.max_age_secs,
    );
    if config.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_pairs() {
        let cookies = parse_cookies("theme=dark; i18next-lng=en-US;foo=bar");
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies["i18next-lng"], "en-US");
        assert_eq!(cookies["theme"], "dark");
        assert_eq!(cookies["foo"], "bar");
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_cookies("").is_empty());
        assert!(parse_cookies(";;").is_empty());
        let cookies = parse_cookies("novalue; =orphan; empty=; ok=1");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["ok"], "1");
    }

    #[test]
    fn test_percent_decoding() {
        let cookies = parse_cookies("i18next-lng=zh%2DCN; bad=%FF%FE");
        assert_eq!(cookies["i18next-lng"], "zh-CN");
        assert_eq!(cookies["bad"], "%FF%FE");
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let cookies = parse_cookies("token=a=b=c");
        assert_eq!(cookies["token"], "a=b=c");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let cookies = parse_cookies("i18next-lng=en-US; i18next-lng=zh-CN");
        assert_eq!(cookies["i18next-lng"], "en-US");
    }

    #[test]
    fn test_language_cookie_attributes() {
        let config = CookieConfig::default();
        assert_eq!(
            language_cookie(Language::EnUs, &config),
            "i18next-lng=en-US; Path=/; Max-Age=31536000; SameSite=Strict"
        );

        let secure = CookieConfig {
            secure: true,
            ..CookieConfig::default()
        };
        assert!(language_cookie(Language::ZhCn, &secure).ends_with("; Secure"));
    }

    #[test]
    fn test_cookie_round_trips_through_parser() {
        let header = language_cookie(Language::EnUs, &CookieConfig::default());
        let pair = header.split(';').next().unwrap();
        assert_eq!(parse_cookies(pair)["i18next-lng"], "en-US");
    }
}
