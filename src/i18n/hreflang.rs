//! Alternate-language and canonical link tags.

use serde::Serialize;

use crate::i18n::Language;

/// A `<link>` tag destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: &'static str,
    pub hreflang: Option<&'static str>,
    pub href: String,
}

/// URL of `path` (without language prefix) in `language`.
pub fn localized_url(base_url: &str, language: Language, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" || path.is_empty() {
        format!("{base}/{}", language.code())
    } else {
        format!("{base}/{}{path}", language.code())
    }
}

/// One alternate link per supported language, `x-default`, and the canonical link.
pub fn alternate_links(
    base_url: &str,
    path: &str,
    current: Language,
    default: Language,
) -> Vec<LinkTag> {
    let mut links: Vec<LinkTag> = Language::ALL
        .into_iter()
        .map(|lang| LinkTag {
            rel: "alternate",
            hreflang: Some(lang.hreflang()),
            href: localized_url(base_url, lang, path),
        })
        .collect();

    links.push(LinkTag {
        rel: "alternate",
        hreflang: Some("x-default"),
        href: localized_url(base_url, default, path),
    });
    links.push(LinkTag {
        rel: "canonical",
        hreflang: None,
        href: localized_url(base_url, current, path),
    });
    links
}
