//! Page-shell assembly: head tags, server markup and state scripts.

use serde::Serialize;
use serde_json::Value;

use crate::i18n::hreflang::{localized_url, LinkTag};
use crate::i18n::{Catalog, Language};
use crate::pages::{normalize_path, PageData, PageRoute};
use crate::render::escape::{escape_html, script_json};
use crate::render::RenderError;
use crate::stores::InitialState;

/// Everything needed to render one page.
#[derive(Debug)]
pub struct ShellContext<'a> {
    pub language: Language,
    pub site_name: &'a str,
    pub description: &'a str,
    pub links: &'a [LinkTag],
    /// `None` when the client is expected to fetch the data itself.
    pub page_data: Option<&'a PageData>,
    pub state: &'a InitialState,
    pub nav: &'a [NavLink],
    pub languages: &'a [NavLink],
}

/// An `<a>` in the site navigation or the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub hreflang: Option<&'static str>,
    pub current: bool,
}

/// Pages listed in the site navigation, in display order.
const NAV_PAGES: [PageRoute; 6] = [
    PageRoute::Index,
    PageRoute::About,
    PageRoute::Contact,
    PageRoute::UnoCss,
    PageRoute::ClientOnly,
    PageRoute::StoreDemo,
];

/// Site navigation in `language`, marking the page at `path` as current.
pub fn nav_links(catalog: &Catalog, language: Language, path: &str) -> Vec<NavLink> {
    let current = normalize_path(path);
    NAV_PAGES
        .into_iter()
        .map(|route| {
            let key = match route {
                PageRoute::Index => "home",
                other => other.catalog_key(),
            };
            NavLink {
                href: localized_url("", language, route.path()),
                label: catalog.t(language, &format!("nav.{key}")),
                hreflang: None,
                current: route.path() == current,
            }
        })
        .collect()
}

/// The page at `path` in every supported language, labelled in that language.
pub fn language_links(path: &str, current: Language) -> Vec<NavLink> {
    Language::ALL
        .into_iter()
        .map(|lang| NavLink {
            href: localized_url("", lang, path),
            label: lang.label().to_string(),
            hreflang: Some(lang.hreflang()),
            current: lang == current,
        })
        .collect()
}

fn render_nav(class: &str, links: &[NavLink]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let mut html = format!("<nav class=\"{class}\">");
    for link in links {
        html.push_str(&format!("<a href=\"{}\"", escape_html(&link.href)));
        if let Some(hreflang) = link.hreflang {
            html.push_str(&format!(" hreflang=\"{hreflang}\""));
        }
        if link.current {
            html.push_str(" aria-current=\"page\"");
        }
        html.push_str(&format!(">{}</a>", escape_html(&link.label)));
    }
    html.push_str("</nav>");
    html
}

impl ShellContext<'_> {
    fn prop(&self, key: &str) -> Option<&str> {
        self.page_data
            .and_then(|data| data.props.get(key))
            .and_then(Value::as_str)
    }

    fn title(&self) -> String {
        match self.prop("title") {
            Some(title) => format!("{title} - {}", self.site_name),
            None => self.site_name.to_string(),
        }
    }
}

pub fn render_head(ctx: &ShellContext<'_>) -> String {
    let mut head = format!(
        "<title>{}</title>\n<meta name=\"description\" content=\"{}\" />",
        escape_html(&ctx.title()),
        escape_html(ctx.description),
    );

    for link in ctx.links {
        head.push('\n');
        head.push_str(&format!("<link rel=\"{}\"", link.rel));
        if let Some(hreflang) = link.hreflang {
            head.push_str(&format!(" hreflang=\"{}\"", escape_html(hreflang)));
        }
        head.push_str(&format!(" href=\"{}\" />", escape_html(&link.href)));
    }
    head
}

pub fn render_body(ctx: &ShellContext<'_>) -> Result<String, RenderError> {
    let route = ctx.page_data.map_or("", |data| data.route.as_str());
    let mut html = format!("<main data-route=\"{}\">", escape_html(route));
    if let Some(title) = ctx.prop("title") {
        html.push_str(&format!("<h1>{}</h1>", escape_html(title)));
    }
    if let Some(content) = ctx.prop("content") {
        html.push_str(&format!("<p>{}</p>", escape_html(content)));
    }
    html.push_str("</main>");
    html.push_str(&render_nav("site-nav", ctx.nav));
    html.push_str(&render_nav("language-switcher", ctx.languages));

    html.push_str(&state_script("__INITIAL_DATA__", &ctx.page_data)?);
    html.push_str(&state_script("__INITIAL_STATE__", ctx.state)?);
    html.push_str(&state_script("__INITIAL_LANGUAGE__", ctx.language.code())?);
    Ok(html)
}

/// `<script>window.NAME = JSON;</script>`
pub fn state_script<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<String, RenderError> {
    Ok(format!("<script>window.{name} = {};</script>", script_json(value)?))
}
