//! Storage API types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bucket as reported by the storage service.
#[derive(Debug, Clone, Deserialize)]
pub struct Bucket {
    /// Bucket identifier.
    pub id: String,
    /// Bucket name.
    pub name: String,
    /// Whether objects in the bucket are publicly readable.
    #[serde(default)]
    pub public: bool,
    /// When the bucket was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Settings applied when creating a bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BucketSettings {
    /// Whether objects in the bucket are publicly readable.
    pub public: bool,
    /// Maximum allowed object size in bytes, if limited.
    pub file_size_limit: Option<u64>,
    /// MIME types accepted by the bucket, if restricted.
    pub allowed_mime_types: Option<Vec<String>>,
}

impl BucketSettings {
    /// Create bucket settings with the given visibility and no restrictions.
    #[must_use]
    pub const fn new(public: bool) -> Self {
        Self {
            public,
            file_size_limit: None,
            allowed_mime_types: None,
        }
    }

    /// Restrict the maximum object size.
    #[must_use]
    pub const fn with_file_size_limit(mut self, bytes: u64) -> Self {
        self.file_size_limit = Some(bytes);
        self
    }

    /// Restrict the accepted MIME types.
    #[must_use]
    pub fn with_allowed_mime_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_mime_types = Some(types.into_iter().map(Into::into).collect());
        self
    }
}

impl Default for BucketSettings {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Options applied to a single object upload.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// MIME type recorded for the object.
    pub content_type: String,
    /// Overwrite an existing object at the same key instead of failing.
    pub upsert: bool,
}

impl UploadOptions {
    /// Create upload options for the given content type (no overwrite).
    #[must_use]
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            upsert: false,
        }
    }

    /// Set overwrite-if-exists semantics.
    #[must_use]
    pub const fn with_upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }
}
