#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::cache::PageCache;
    use crate::content::{InMemoryStore, Query};
    use crate::test::utils::test_utils::{loader_for, settings};

    #[rocket::async_test]
    async fn test_cache_reuses_content_within_window() {
        let store = Arc::new(InMemoryStore::new().with_settings(settings("Test Barbell")));
        let cache = PageCache::new(loader_for(store.clone()), Duration::from_secs(60));

        let first = cache.get().await;
        let second = cache.get().await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.calls(), 6);
    }

    #[rocket::async_test]
    async fn test_cache_reloads_after_window() {
        let store = Arc::new(InMemoryStore::new().with_settings(settings("Test Barbell")));
        let cache = PageCache::new(loader_for(store.clone()), Duration::ZERO);

        cache.get().await;
        cache.get().await;

        assert_eq!(store.calls(), 12);
    }

    #[rocket::async_test]
    async fn test_fallback_is_cached_for_one_window() {
        let store = Arc::new(
            InMemoryStore::new()
                .with_settings(settings("Test Barbell"))
                .failing(Query::Officers),
        );
        let cache = PageCache::new(loader_for(store.clone()), Duration::from_secs(60));

        let first = cache.get().await;
        let calls_after_first = store.calls();
        let second = cache.get().await;

        assert!(first.settings.is_none());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.calls(), calls_after_first);
    }

    #[rocket::async_test]
    async fn test_concurrent_requests_share_one_load() {
        let store = Arc::new(InMemoryStore::new());
        let cache = Arc::new(PageCache::new(
            loader_for(store.clone()),
            Duration::from_secs(60),
        ));

        let (a, b) = tokio::join!(cache.get(), cache.get());

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.calls(), 6);
    }
}
