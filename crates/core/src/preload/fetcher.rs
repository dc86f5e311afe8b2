//! Fetch transport for preloading.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use super::types::Priority;

/// A failed preload fetch. Preloading is best-effort, so these are only
/// ever logged.
#[derive(Debug, Error)]
#[error("preload fetch failed: {0}")]
pub struct FetchError(pub String);

/// Transport used to warm an image into the cache.
#[async_trait]
pub trait ImageFetcher: Send + Sync + 'static {
    /// Fetch the body at `url` with the given priority.
    async fn fetch(&self, url: &str, priority: Priority) -> Result<Bytes, FetchError>;
}

/// HTTP fetcher. Maps [`Priority`] to the RFC 9218 `priority` request
/// header so intermediaries can reorder accordingly.
pub struct HttpImageFetcher {
    http: reqwest::Client,
}

impl HttpImageFetcher {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str, priority: Priority) -> Result<Bytes, FetchError> {
        let response = self
            .http
            .get(url)
            .header("priority", priority.header_value())
            .send()
            .await
            .map_err(|e| FetchError(e.to_string()))?
            .error_for_status()
            .map_err(|e| FetchError(e.to_string()))?;

        response.bytes().await.map_err(|e| FetchError(e.to_string()))
    }
}
