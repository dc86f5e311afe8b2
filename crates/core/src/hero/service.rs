//! The publish flow itself.

use bytes::Bytes;
use std::path::Path;
use tracing::info;

use super::error::HeroError;
use crate::storage::{BucketSettings, ObjectStorage, UploadOptions};

/// Bucket holding the hero image.
pub const HERO_BUCKET: &str = "hero-images";

/// Fixed key of the hero image inside [`HERO_BUCKET`].
pub const HERO_OBJECT_KEY: &str = "hero/hero-bg.jpg";

/// Content type recorded for the hero image.
pub const HERO_CONTENT_TYPE: &str = "image/jpeg";

/// Default local source path when none is given.
pub const DEFAULT_SOURCE: &str = "assets/hero-bg.jpg";

/// Size limit applied when creating the hero bucket: 50 MiB.
const HERO_BUCKET_SIZE_LIMIT: u64 = 50 * 1024 * 1024;

fn hero_bucket_settings() -> BucketSettings {
    BucketSettings::new(true)
        .with_file_size_limit(HERO_BUCKET_SIZE_LIMIT)
        .with_allowed_mime_types(["image/jpeg", "image/png", "image/gif", "image/webp"])
}

/// Publish the hero image from `source` and return its public URL.
///
/// Steps, each attempted exactly once:
///
/// 1. confirm `source` exists locally;
/// 2. list buckets;
/// 3. create [`HERO_BUCKET`] if it is not in the listing (a bucket created
///    by an earlier run is reused, never rolled back);
/// 4. read the file into memory;
/// 5. upload to [`HERO_OBJECT_KEY`] with upsert semantics;
/// 6. resolve the public URL.
///
/// # Errors
///
/// Returns a [`HeroError`] naming the step that failed. When the source
/// file is missing, no storage call is made.
pub async fn publish_hero_image<S: ObjectStorage>(
    storage: &S,
    source: &Path,
) -> Result<String, HeroError> {
    match tokio::fs::try_exists(source).await {
        Ok(true) => {}
        Ok(false) => return Err(HeroError::file_not_found(source)),
        Err(e) => return Err(HeroError::read(source, e)),
    }
    info!(source = %source.display(), "publishing hero image");

    let buckets = storage.list_buckets().await.map_err(HeroError::Connection)?;

    if buckets.iter().any(|b| b.name == HERO_BUCKET) {
        info!(bucket = HERO_BUCKET, "bucket already exists, reusing");
    } else {
        info!(bucket = HERO_BUCKET, "creating bucket");
        storage
            .create_bucket(HERO_BUCKET, &hero_bucket_settings())
            .await
            .map_err(HeroError::BucketCreate)?;
    }

    let content = tokio::fs::read(source)
        .await
        .map_err(|e| HeroError::read(source, e))?;
    info!(bytes = content.len(), key = HERO_OBJECT_KEY, "uploading");

    let options = UploadOptions::new(HERO_CONTENT_TYPE).with_upsert(true);
    storage
        .upload(HERO_BUCKET, HERO_OBJECT_KEY, Bytes::from(content), &options)
        .await
        .map_err(HeroError::Upload)?;

    let url = storage.public_url(HERO_BUCKET, HERO_OBJECT_KEY);
    info!(%url, "hero image published");
    Ok(url)
}
