//! HTML template with head and body placeholders.

use std::path::PathBuf;
use std::sync::Arc;

use crate::i18n::Language;
use crate::render::RenderError;

pub const HEAD_PLACEHOLDER: &str = "<!--app-head-->";
pub const HTML_PLACEHOLDER: &str = "<!--app-html-->";

const BUILTIN_TEMPLATE: &str = include_str!("../../templates/index.html");

/// A validated page template.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Validate that both placeholders are present.
    pub fn parse(source: impl Into<String>) -> Result<Self, RenderError> {
        let source = source.into();
        for placeholder in [HEAD_PLACEHOLDER, HTML_PLACEHOLDER] {
            if !source.contains(placeholder) {
                return Err(RenderError::MissingPlaceholder(placeholder));
            }
        }
        Ok(Self { source })
    }

    pub fn builtin() -> Self {
        Self {
            source: BUILTIN_TEMPLATE.to_string(),
        }
    }

    /// Fill the placeholders and set the document language.
    pub fn render(&self, head: &str, html: &str, language: Language) -> String {
        let filled = self
            .source
            .replacen(HEAD_PLACEHOLDER, head, 1)
            .replacen(HTML_PLACEHOLDER, html, 1);
        set_html_lang(&filled, language.code())
    }
}

/// Set (or add) the `lang` attribute of the first `<html>` tag.
fn set_html_lang(document: &str, code: &str) -> String {
    let Some(start) = document.find("<html") else {
        return document.to_string();
    };
    let Some(len) = document[start..].find('>') else {
        return document.to_string();
    };
    let tag = &document[start..start + len];

    let lang_attr = tag
        .match_indices("lang=\"")
        .map(|(idx, _)| idx)
        .find(|&idx| tag[..idx].ends_with(|c: char| c.is_ascii_whitespace()));

    let new_tag = match lang_attr {
        Some(attr) => {
            let value_start = attr + "lang=\"".len();
            match tag[value_start..].find('"') {
                Some(value_len) => format!(
                    "{}{}{}",
                    &tag[..value_start],
                    code,
                    &tag[value_start + value_len..]
                ),
                None => tag.to_string(),
            }
        }
        None => format!("{tag} lang=\"{code}\""),
    };

    format!("{}{}{}", &document[..start], new_tag, &document[start + len..])
}

/// Where templates come from.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Loaded once at startup.
    Cached(Arc<Template>),
    /// Re-read from disk for every request.
    Reload(PathBuf),
}

impl TemplateSource {
    /// Resolve the configured template, reading it once unless `reload` is set.
    pub fn from_config(path: Option<&str>, reload: bool) -> Result<Self, RenderError> {
        match path {
            None => Ok(TemplateSource::Cached(Arc::new(Template::builtin()))),
            Some(path) if reload => Ok(TemplateSource::Reload(PathBuf::from(path))),
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|e| RenderError::Template {
                    path: PathBuf::from(path),
                    source: e,
                })?;
                Ok(TemplateSource::Cached(Arc::new(Template::parse(source)?)))
            }
        }
    }

    pub async fn load(&self) -> Result<Arc<Template>, RenderError> {
        match self {
            TemplateSource::Cached(template) => Ok(template.clone()),
            TemplateSource::Reload(path) => {
                let source = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| RenderError::Template {
                        path: path.clone(),
                        source: e,
                    })?;
                Ok(Arc::new(Template::parse(source)?))
            }
        }
    }
}
