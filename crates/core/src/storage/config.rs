//! Storage client configuration.

use serde::Deserialize;

/// Connection settings for the hosted storage service.
///
/// The service key is a secret and therefore has no default: configuration
/// loading fails hard when it is absent instead of falling back to a
/// baked-in credential.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the storage service, e.g. `https://xyz.supabase.co`.
    pub endpoint: String,
    /// Service role key used to authenticate every request.
    pub service_key: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    StorageConfig::DEFAULT_REQUEST_TIMEOUT_SECS
}

impl StorageConfig {
    /// Default per-request timeout: 30 seconds.
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Create a new storage config with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service_key: service_key.into(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}
