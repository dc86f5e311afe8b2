//! Object storage trait and the reqwest-backed Supabase implementation.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::time::Duration;

use super::config::StorageConfig;
use super::error::StorageError;
use super::types::{Bucket, BucketSettings, UploadOptions};

/// Operations the storefront needs from its object store.
///
/// Implementations make exactly one attempt per call; callers decide what a
/// failure means for them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// List all buckets visible to the credential.
    async fn list_buckets(&self) -> Result<Vec<Bucket>, StorageError>;

    /// Create a bucket with the given settings.
    async fn create_bucket(
        &self,
        name: &str,
        settings: &BucketSettings,
    ) -> Result<(), StorageError>;

    /// Upload an object to `bucket` under `key`.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        options: &UploadOptions,
    ) -> Result<(), StorageError>;

    /// Public URL for an object in a public bucket. Pure string assembly;
    /// the object is not checked for existence.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}

/// Wire shape of the bucket creation request.
#[derive(Debug, Serialize)]
struct CreateBucketRequest<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_size_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_mime_types: Option<&'a [String]>,
}

impl<'a> CreateBucketRequest<'a> {
    fn new(name: &'a str, settings: &'a BucketSettings) -> Self {
        Self {
            id: name,
            name,
            public: settings.public,
            file_size_limit: settings.file_size_limit,
            allowed_mime_types: settings.allowed_mime_types.as_deref(),
        }
    }
}

/// Storage client for Supabase-compatible hosted storage.
pub struct SupabaseStorage {
    http: reqwest::Client,
    endpoint: String,
    service_key: String,
}

impl SupabaseStorage {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StorageError::configuration(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            service_key: config.service_key,
        })
    }

    fn bucket_api_url(&self) -> String {
        format!("{}/storage/v1/bucket", self.endpoint)
    }

    fn object_api_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.endpoint, bucket, key)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    /// Turn a non-success response into an API error carrying the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StorageError::api(status.as_u16(), message))
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn list_buckets(&self) -> Result<Vec<Bucket>, StorageError> {
        let response = self
            .authorize(self.http.get(self.bucket_api_url()))
            .send()
            .await?;

        let buckets = Self::ensure_success(response)
            .await?
            .json::<Vec<Bucket>>()
            .await?;
        Ok(buckets)
    }

    async fn create_bucket(
        &self,
        name: &str,
        settings: &BucketSettings,
    ) -> Result<(), StorageError> {
        let body = CreateBucketRequest::new(name, settings);
        let response = self
            .authorize(self.http.post(self.bucket_api_url()))
            .json(&body)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content: Bytes,
        options: &UploadOptions,
    ) -> Result<(), StorageError> {
        let response = self
            .authorize(self.http.post(self.object_api_url(bucket, key)))
            .header(reqwest::header::CONTENT_TYPE, &options.content_type)
            .header("x-upsert", if options.upsert { "true" } else { "false" })
            .body(content)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.endpoint, bucket, key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SupabaseStorage {
        SupabaseStorage::new(StorageConfig::new(
            "https://example.supabase.co/",
            "service-key",
        ))
        .expect("client should build")
    }

    #[test]
    fn test_public_url_format() {
        let storage = test_client();
        assert_eq!(
            storage.public_url("hero-images", "hero/hero-bg.jpg"),
            "https://example.supabase.co/storage/v1/object/public/hero-images/hero/hero-bg.jpg"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let storage = test_client();
        assert_eq!(
            storage.bucket_api_url(),
            "https://example.supabase.co/storage/v1/bucket"
        );
        assert_eq!(
            storage.object_api_url("hero-images", "hero/hero-bg.jpg"),
            "https://example.supabase.co/storage/v1/object/hero-images/hero/hero-bg.jpg"
        );
    }

    #[test]
    fn test_create_bucket_wire_shape() {
        let settings = BucketSettings::new(true)
            .with_file_size_limit(52_428_800)
            .with_allowed_mime_types(["image/jpeg", "image/png"]);
        let request = CreateBucketRequest::new("hero-images", &settings);

        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "hero-images",
                "name": "hero-images",
                "public": true,
                "file_size_limit": 52_428_800,
                "allowed_mime_types": ["image/jpeg", "image/png"]
            })
        );
    }

    #[test]
    fn test_create_bucket_wire_shape_omits_unset_limits() {
        let settings = BucketSettings::new(false);
        let request = CreateBucketRequest::new("plain", &settings);

        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"id": "plain", "name": "plain", "public": false})
        );
    }
}
