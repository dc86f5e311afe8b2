//! Preload option and handle types.

use serde::Deserialize;

/// Fetch priority forwarded to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Fetch eagerly, ahead of other traffic.
    High,
    /// Fetch opportunistically.
    #[default]
    Low,
}

impl Priority {
    /// RFC 9218 `priority` header value for this level.
    #[must_use]
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::High => "u=1",
            Self::Low => "u=5",
        }
    }
}

/// Options for one preload activation.
#[derive(Debug, Clone)]
pub struct PreloadOptions {
    /// Priority applied to every fetch in the activation.
    pub priority: Priority,
    /// Upper bound on how many URLs are preloaded.
    pub max_images: usize,
}

impl PreloadOptions {
    /// Default number of images preloaded per activation.
    pub const DEFAULT_MAX_IMAGES: usize = 1;

    /// Create options with the given priority and the default image bound.
    #[must_use]
    pub const fn new(priority: Priority) -> Self {
        Self {
            priority,
            max_images: Self::DEFAULT_MAX_IMAGES,
        }
    }

    /// Set the upper bound on preloaded URLs.
    #[must_use]
    pub const fn with_max_images(mut self, max_images: usize) -> Self {
        self.max_images = max_images;
        self
    }
}

impl Default for PreloadOptions {
    fn default() -> Self {
        Self::new(Priority::Low)
    }
}

/// One preload resource created by a session, exposed for inspection.
#[derive(Debug, Clone)]
pub struct PreloadHandle {
    url: String,
    priority: Priority,
}

impl PreloadHandle {
    pub(crate) fn new(url: String, priority: Priority) -> Self {
        Self { url, priority }
    }

    /// URL this handle preloads.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Priority the fetch was issued with.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Warm cache sizing, loadable from configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PreloadConfig {
    /// Maximum number of cached images.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live for cached images, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    PreloadConfig::DEFAULT_CACHE_CAPACITY
}

fn default_cache_ttl() -> u64 {
    PreloadConfig::DEFAULT_CACHE_TTL_SECS
}

impl PreloadConfig {
    /// Default warm cache capacity (number of images).
    pub const DEFAULT_CACHE_CAPACITY: u64 = 64;
    /// Default warm cache TTL: 5 minutes.
    pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: Self::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
