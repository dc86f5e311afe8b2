//! Client-side image existence probe.

use serde::Deserialize;
use std::time::Duration;

/// Probe timing, loadable from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// How long to wait for a probe before treating the image as absent,
    /// in seconds.
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

fn default_probe_timeout() -> u64 {
    ProbeConfig::DEFAULT_TIMEOUT_SECS
}

impl ProbeConfig {
    /// Default probe timeout: 10 seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Whether an image is reachable at `url`, with the default timeout.
///
/// See [`image_exists_with_timeout`].
pub async fn image_exists(client: &reqwest::Client, url: &str) -> bool {
    image_exists_with_timeout(client, url, ProbeConfig::default().timeout()).await
}

/// Whether an image is reachable at `url`.
///
/// `true` only when the GET completes within `timeout` with a success
/// status and an `image/*` content type. Malformed URLs, transport
/// failures, non-success statuses, non-image bodies, and timeouts are all
/// `false` - callers only need existence, not diagnosis. Never fails.
pub async fn image_exists_with_timeout(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> bool {
    let probe = async {
        let response = client.get(url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let is_image = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("image/"));
        is_image.then_some(())
    };

    matches!(tokio::time::timeout(timeout, probe).await, Ok(Some(())))
}
