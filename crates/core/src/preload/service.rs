//! Preloader and per-activation sessions.

use bytes::Bytes;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::fetcher::ImageFetcher;
use super::types::{PreloadConfig, PreloadHandle, PreloadOptions};

/// Warms images into an in-memory cache ahead of use.
///
/// Cheap to clone; clones share the fetcher and the cache.
pub struct ImagePreloader<F: ImageFetcher> {
    fetcher: Arc<F>,
    cache: Cache<String, Bytes>,
}

impl<F: ImageFetcher> Clone for ImagePreloader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            cache: self.cache.clone(),
        }
    }
}

impl<F: ImageFetcher> ImagePreloader<F> {
    /// Create a preloader with default cache sizing.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, &PreloadConfig::default())
    }

    /// Create a preloader with explicit cache sizing.
    #[must_use]
    pub fn with_config(fetcher: F, config: &PreloadConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self {
            fetcher: Arc::new(fetcher),
            cache,
        }
    }

    /// Start one preload activation.
    ///
    /// Selects at most `options.max_images` non-empty URLs in input order
    /// and spawns a fetch task for each. The returned session owns those
    /// tasks; dropping it aborts whichever are still running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn preload<I, S>(&self, urls: I, options: &PreloadOptions) -> PreloadSession
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: Vec<String> = urls
            .into_iter()
            .map(Into::into)
            .filter(|url| !url.is_empty())
            .take(options.max_images)
            .collect();

        let mut handles = Vec::with_capacity(selected.len());
        let mut tasks = Vec::with_capacity(selected.len());

        for url in selected {
            handles.push(PreloadHandle::new(url.clone(), options.priority));

            let fetcher = Arc::clone(&self.fetcher);
            let cache = self.cache.clone();
            let priority = options.priority;
            tasks.push(tokio::spawn(async move {
                match fetcher.fetch(&url, priority).await {
                    Ok(body) => cache.insert(url, body),
                    Err(e) => debug!(%url, error = %e, "preload fetch failed"),
                }
            }));
        }

        PreloadSession { handles, tasks }
    }

    /// Cached body for `url`, if a preload already completed.
    #[must_use]
    pub fn cached(&self, url: &str) -> Option<Bytes> {
        self.cache.get(url)
    }

    /// Number of images currently in the warm cache.
    #[must_use]
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

/// One preload activation: the handles it created and the fetch tasks
/// backing them.
pub struct PreloadSession {
    handles: Vec<PreloadHandle>,
    tasks: Vec<tokio::task::JoinHandle<()>>,
}

impl PreloadSession {
    /// Handles created by this activation, in input order.
    #[must_use]
    pub fn handles(&self) -> &[PreloadHandle] {
        &self.handles
    }

    /// Number of preloads started by this activation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether this activation started any preloads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every fetch in this activation to finish.
    pub async fn wait(mut self) {
        for task in self.tasks.drain(..) {
            // Aborted or panicked fetches are already logged by the task.
            let _ = task.await;
        }
    }
}

impl Drop for PreloadSession {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preload::fetcher::FetchError;
    use crate::preload::types::Priority;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Completes immediately, recording fetched URLs in order.
    #[derive(Default)]
    struct RecordingFetcher {
        fetched: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageFetcher for RecordingFetcher {
        async fn fetch(&self, url: &str, _priority: Priority) -> Result<Bytes, FetchError> {
            self.fetched
                .lock()
                .expect("lock poisoned")
                .push(url.to_string());
            Ok(Bytes::from_static(b"pixels"))
        }
    }

    /// Never completes; counts how many fetches started and finished.
    #[derive(Default)]
    struct StalledFetcher {
        started: AtomicUsize,
        completed: AtomicUsize,
    }

    #[async_trait]
    impl ImageFetcher for StalledFetcher {
        async fn fetch(&self, _url: &str, _priority: Priority) -> Result<Bytes, FetchError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            std::future::pending::<()>().await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(Bytes::new())
        }
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_default_options_preload_one_image() {
        let preloader = ImagePreloader::new(RecordingFetcher::default());

        let session = preloader.preload(
            urls(&["/a.jpg", "/b.jpg", "/c.jpg"]),
            &PreloadOptions::default(),
        );

        assert_eq!(session.len(), 1);
        assert_eq!(session.handles()[0].url(), "/a.jpg");
    }

    #[tokio::test]
    async fn test_selection_skips_empty_urls_and_preserves_order() {
        let preloader = ImagePreloader::new(RecordingFetcher::default());
        let options = PreloadOptions::new(Priority::High).with_max_images(3);

        let session = preloader.preload(urls(&["", "/a.jpg", "", "/b.jpg", "/c.jpg"]), &options);

        let handle_urls: Vec<&str> = session.handles().iter().map(PreloadHandle::url).collect();
        assert_eq!(handle_urls, ["/a.jpg", "/b.jpg", "/c.jpg"]);
        assert!(session
            .handles()
            .iter()
            .all(|h| h.priority() == Priority::High));
    }

    #[tokio::test]
    async fn test_whitespace_url_gets_a_handle() {
        // Only the empty string is filtered out; a blank-but-present URL
        // is still selected, exactly like any other non-empty entry.
        let preloader = ImagePreloader::new(RecordingFetcher::default());

        let session = preloader.preload(urls(&["  "]), &PreloadOptions::default());

        assert_eq!(session.len(), 1);
        assert_eq!(session.handles()[0].url(), "  ");
    }

    #[tokio::test]
    async fn test_handle_count_is_bounded_by_max_images() {
        let preloader = ImagePreloader::new(RecordingFetcher::default());
        let options = PreloadOptions::default().with_max_images(2);

        let session = preloader.preload(urls(&["/a.jpg", "/b.jpg", "/c.jpg"]), &options);
        assert_eq!(session.len(), 2);

        // Fewer URLs than the bound: every URL gets a handle.
        let session = preloader.preload(urls(&["/a.jpg"]), &options);
        assert_eq!(session.len(), 1);
    }

    #[tokio::test]
    async fn test_completed_fetches_land_in_cache() {
        let preloader = ImagePreloader::new(RecordingFetcher::default());
        let options = PreloadOptions::default().with_max_images(2);

        let session = preloader.preload(urls(&["/a.jpg", "/b.jpg"]), &options);
        session.wait().await;

        assert_eq!(
            preloader.cached("/a.jpg"),
            Some(Bytes::from_static(b"pixels"))
        );
        assert_eq!(
            preloader.cached("/b.jpg"),
            Some(Bytes::from_static(b"pixels"))
        );
        assert_eq!(preloader.cache_entry_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetches_are_swallowed() {
        struct FailingFetcher;

        #[async_trait]
        impl ImageFetcher for FailingFetcher {
            async fn fetch(&self, _url: &str, _priority: Priority) -> Result<Bytes, FetchError> {
                Err(FetchError("404".to_string()))
            }
        }

        let preloader = ImagePreloader::new(FailingFetcher);
        let session = preloader.preload(urls(&["/missing.jpg"]), &PreloadOptions::default());
        session.wait().await;

        assert_eq!(preloader.cached("/missing.jpg"), None);
    }

    #[tokio::test]
    async fn test_drop_aborts_in_flight_fetches() {
        let preloader = ImagePreloader::new(StalledFetcher::default());
        let options = PreloadOptions::default().with_max_images(2);

        let session = preloader.preload(urls(&["/a.jpg", "/b.jpg"]), &options);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(preloader.fetcher.started.load(Ordering::SeqCst), 2);

        drop(session);
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(preloader.fetcher.completed.load(Ordering::SeqCst), 0);
        assert_eq!(preloader.cache_entry_count(), 0);
    }

    #[tokio::test]
    async fn test_consecutive_activations_leave_no_stragglers() {
        let preloader = ImagePreloader::new(StalledFetcher::default());
        let options = PreloadOptions::default();

        let first = preloader.preload(urls(&["/a.jpg"]), &options);
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(first);

        let second = preloader.preload(urls(&["/b.jpg"]), &options);
        tokio::time::sleep(Duration::from_millis(20)).await;

        // Only the second activation's fetch can still be running.
        assert_eq!(preloader.fetcher.started.load(Ordering::SeqCst), 2);
        assert_eq!(preloader.fetcher.completed.load(Ordering::SeqCst), 0);
        assert_eq!(second.len(), 1);
        assert_eq!(second.handles()[0].url(), "/b.jpg");
    }

    #[tokio::test]
    async fn test_zero_max_images_starts_nothing() {
        let preloader = ImagePreloader::new(RecordingFetcher::default());
        let options = PreloadOptions::default().with_max_images(0);

        let session = preloader.preload(urls(&["/a.jpg"]), &options);
        assert!(session.is_empty());
    }
}
