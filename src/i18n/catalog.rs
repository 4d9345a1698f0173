//! Translated strings.
//!
//! One `common` namespace per language, bundled from `locales/<code>/common.json`.
//! Lookups fall back to the fallback language, then to the key itself.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::i18n::Language;

const ZH_CN_COMMON: &str = include_str!("../../locales/zh-CN/common.json");
const EN_US_COMMON: &str = include_str!("../../locales/en-US/common.json");

#[derive(Debug, Error)]
#[error("invalid catalog for {language}: {source}")]
pub struct CatalogError {
    pub language: Language,
    #[source]
    pub source: serde_json::Error,
}

/// Translation resources for every supported language.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: HashMap<Language, Value>,
    fallback: Language,
}

impl Catalog {
    /// Load the catalogs compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_sources(
            &[(Language::ZhCn, ZH_CN_COMMON), (Language::EnUs, EN_US_COMMON)],
            Language::ZhCn,
        )
    }

    /// Build a catalog from raw JSON documents.
    pub fn from_sources(
        sources: &[(Language, &str)],
        fallback: Language,
    ) -> Result<Self, CatalogError> {
        let mut resources = HashMap::with_capacity(sources.len());
        for &(language, json) in sources {
            let value = serde_json::from_str(json)
                .map_err(|source| CatalogError { language, source })?;
            resources.insert(language, value);
        }
        Ok(Self {
            resources,
            fallback,
        })
    }

    /// Look up a dotted key such as `pages.about.title`.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.resources.get(&language)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }

    /// Translate a key, falling back to the fallback language and then the key.
    pub fn t(&self, language: Language, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Translate a key and substitute `{{name}}` placeholders.
    pub fn t_with(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(language, key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{name}}}}}"), value);
        }
        text
    }
}
