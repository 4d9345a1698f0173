//! Initial-data loading for server renders and client fallback fetches.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::PagesConfig;
use crate::i18n::{Catalog, Language};
use crate::pages::cache::PageCache;
use crate::pages::fetch::DataSource;
use crate::pages::props::InitialProps;
use crate::pages::{PageContext, PageRoute};

/// Payload serialized into the page for the client to hydrate from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub route: String,
    pub props: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revalidate: Option<u64>,
    pub client_generated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Data(PageData),
    Redirect { destination: String, permanent: bool },
    /// The page exists but declared the request not found.
    NotFound,
    /// No server payload; the client fetches on hydration.
    Skipped(PageRoute),
    /// No page is registered at the path.
    Unmatched,
}

pub struct PageLoader {
    catalog: Arc<Catalog>,
    source: DataSource,
    cache: Option<PageCache>,
}

impl PageLoader {
    pub fn new(catalog: Arc<Catalog>, config: &PagesConfig) -> Self {
        Self {
            catalog,
            source: DataSource::new(Duration::from_millis(config.fetch_latency_ms)),
            cache: config.cache_enabled.then(PageCache::new),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load data for a server render. Client-only pages and failed loads
    /// produce [`LoadOutcome::Skipped`].
    pub async fn load_for_ssr(&self, ctx: &PageContext) -> LoadOutcome {
        let Some(route) = PageRoute::match_path(&ctx.path) else {
            tracing::debug!(path = %ctx.path, "No page registered");
            return LoadOutcome::Unmatched;
        };

        if route.skips_server_prefetch() {
            tracing::debug!(route = route.path(), "Leaving data to the client fetch");
            return LoadOutcome::Skipped(route);
        }

        self.load(route, ctx, false).await
    }

    /// Load data requested by the client after hydration or navigation.
    pub async fn load_for_client(&self, ctx: &PageContext) -> LoadOutcome {
        match PageRoute::match_path(&ctx.path) {
            Some(route) => self.load(route, ctx, true).await,
            None => LoadOutcome::Unmatched,
        }
    }

    /// Payload rendered for unknown pages.
    pub fn not_found_data(&self, language: Language) -> PageData {
        PageData {
            route: "404".to_string(),
            props: json!({
                "title": self.catalog.t(language, "pages.not_found.title"),
                "content": self.catalog.t(language, "pages.not_found.content"),
            }),
            revalidate: None,
            client_generated: false,
        }
    }

    async fn load(&self, route: PageRoute, ctx: &PageContext, client: bool) -> LoadOutcome {
        // Query-dependent payloads are never shared.
        let cacheable = ctx.query.is_empty();
        if let (Some(cache), true) = (&self.cache, cacheable) {
            if let Some(mut data) = cache.get(route, ctx.language) {
                data.client_generated = client;
                return LoadOutcome::Data(data);
            }
        }

        match route.initial_props(ctx, &self.catalog, &self.source).await {
            Ok(InitialProps::Props { props, revalidate }) => {
                let data = PageData {
                    route: route.path().to_string(),
                    props,
                    revalidate,
                    client_generated: client,
                };
                if let (Some(cache), true, Some(secs)) = (&self.cache, cacheable, revalidate) {
                    cache.insert(route, ctx.language, data.clone(), Duration::from_secs(secs));
                }
                LoadOutcome::Data(data)
            }
            Ok(InitialProps::Redirect {
                destination,
                permanent,
            }) => LoadOutcome::Redirect {
                destination,
                permanent,
            },
            Ok(InitialProps::NotFound) => LoadOutcome::NotFound,
            Err(e) => {
                tracing::warn!(route = route.path(), error = %e, "Initial props failed, rendering without data");
                LoadOutcome::Skipped(route)
            }
        }
    }
}
