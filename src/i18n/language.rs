//! Supported languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the locale codes the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

/// Returned when a code is not one of [`Language::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}'")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 2] = [Language::ZhCn, Language::EnUs];

    /// Locale code as carried in cookies, URLs and the API.
    pub fn code(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
        }
    }

    /// Code used in `hreflang` attributes.
    pub fn hreflang(self) -> &'static str {
        self.code()
    }

    /// Name shown in the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::ZhCn => "中文",
            Language::EnUs => "English",
        }
    }

    /// Primary language subtag (`zh`, `en`).
    pub fn primary_subtag(self) -> &'static str {
        match self {
            Language::ZhCn => "zh",
            Language::EnUs => "en",
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
