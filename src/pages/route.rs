//! Static page table.

use serde::Serialize;

/// Every page the application knows how to prefetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageRoute {
    Index,
    About,
    Contact,
    UnoCss,
    ClientOnly,
    StoreDemo,
    /// Legacy alias that redirects to `Index`.
    Home,
}

impl PageRoute {
    pub const ALL: [PageRoute; 7] = [
        PageRoute::Index,
        PageRoute::About,
        PageRoute::Contact,
        PageRoute::UnoCss,
        PageRoute::ClientOnly,
        PageRoute::StoreDemo,
        PageRoute::Home,
    ];

    /// Normalized path the page is served at.
    pub fn path(self) -> &'static str {
        match self {
            PageRoute::Index => "/",
            PageRoute::About => "/about",
            PageRoute::Contact => "/contact",
            PageRoute::UnoCss => "/unocss",
            PageRoute::ClientOnly => "/client-only",
            PageRoute::StoreDemo => "/zustand-demo",
            PageRoute::Home => "/home",
        }
    }

    /// Catalog section holding the page's strings.
    pub fn catalog_key(self) -> &'static str {
        match self {
            PageRoute::Index | PageRoute::Home => "index",
            PageRoute::About => "about",
            PageRoute::Contact => "contact",
            PageRoute::UnoCss => "unocss",
            PageRoute::ClientOnly => "client_only",
            PageRoute::StoreDemo => "store_demo",
        }
    }

    /// Pages whose data is deliberately left to the client fetch.
    pub fn skips_server_prefetch(self) -> bool {
        matches!(self, PageRoute::ClientOnly)
    }

    /// Exact match on the normalized path.
    pub fn match_path(path: &str) -> Option<PageRoute> {
        let normalized = normalize_path(path);
        PageRoute::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
    }
}

/// Lowercase, ensure a leading `/`, drop query/fragment and one trailing `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut normalized = if path.starts_with('/') {
        path.to_lowercase()
    } else {
        format!("/{}", path.to_lowercase())
    };
    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
