use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use crate::loader::{PageData, PageLoader};

struct CachedPage {
    data: Arc<PageData>,
    loaded_at: Instant,
}

/// Serves the last loaded page content until it is older than the
/// revalidation window, then reloads it. Fallback (empty) results are cached
/// like any other, so the next window is the retry.
pub struct PageCache {
    loader: PageLoader,
    revalidate: Duration,
    slot: Mutex<Option<CachedPage>>,
}

impl PageCache {
    pub fn new(loader: PageLoader, revalidate: Duration) -> Self {
        Self {
            loader,
            revalidate,
            slot: Mutex::new(None),
        }
    }

    pub fn revalidate_after(&self) -> Duration {
        self.revalidate
    }

    pub async fn get(&self) -> Arc<PageData> {
        // Held across the reload so concurrent requests share one refresh.
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.loaded_at.elapsed() < self.revalidate {
                return Arc::clone(&cached.data);
            }
            debug!(
                age_ms = cached.loaded_at.elapsed().as_millis() as u64,
                "Page content stale, revalidating"
            );
        }

        let data = Arc::new(self.loader.load().await);
        *slot = Some(CachedPage {
            data: Arc::clone(&data),
            loaded_at: Instant::now(),
        });
        data
    }
}
