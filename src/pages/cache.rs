//! Cache for pages that declare a revalidate interval.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::i18n::Language;
use crate::pages::{PageData, PageRoute};
use crate::observability::metrics;

#[derive(Debug, Clone)]
struct CachedPage {
    data: PageData,
    expires_at: Instant,
}

/// Payloads keyed by page and language, each valid for its own interval.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    inner: Arc<DashMap<(PageRoute, Language), CachedPage>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh payload for the key, if any. Expired entries are evicted.
    pub fn get(&self, route: PageRoute, language: Language) -> Option<PageData> {
        let key = (route, language);
        let hit = self
            .inner
            .get(&key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.data.clone());

        if hit.is_none() {
            self.inner.remove_if(&key, |_, entry| entry.expires_at <= Instant::now());
        }
        metrics::record_page_cache(route, hit.is_some());
        hit
    }

    pub fn insert(&self, route: PageRoute, language: Language, data: PageData, ttl: Duration) {
        self.inner.insert(
            (route, language),
            CachedPage {
                data,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(title: &str) -> PageData {
        PageData {
            route: "/".into(),
            props: json!({ "title": title }),
            revalidate: Some(60),
            client_generated: false,
        }
    }

    #[test]
    fn test_hit_per_language() {
        let cache = PageCache::new();
        cache.insert(PageRoute::Index, Language::EnUs, data("Home"), Duration::from_secs(60));

        assert_eq!(
            cache.get(PageRoute::Index, Language::EnUs).unwrap().props["title"],
            "Home"
        );
        assert!(cache.get(PageRoute::Index, Language::ZhCn).is_none());
    }

    #[test]
    fn test_expired_entries_are_evicted() {
        let cache = PageCache::new();
        cache.insert(PageRoute::Index, Language::EnUs, data("Home"), Duration::ZERO);
        assert_eq!(cache.len(), 1);

        assert!(cache.get(PageRoute::Index, Language::EnUs).is_none());
        assert!(cache.is_empty());
    }
}
