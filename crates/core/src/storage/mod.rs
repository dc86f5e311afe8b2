//! Client for the hosted storage HTTP API (Supabase Storage compatible).
//!
//! The storefront keeps its public media in a hosted object store reached
//! over plain HTTP:
//!
//! ```text
//! GET  {endpoint}/storage/v1/bucket                      list buckets
//! POST {endpoint}/storage/v1/bucket                      create bucket
//! POST {endpoint}/storage/v1/object/{bucket}/{key}       upload (x-upsert)
//!      {endpoint}/storage/v1/object/public/{bucket}/{key} public URL
//! ```
//!
//! The [`ObjectStorage`] trait is the seam consumers program against;
//! [`SupabaseStorage`] is the reqwest-backed implementation. Every call is
//! attempted exactly once - retry policy belongs to the caller.

mod client;
mod config;
mod error;
mod types;

pub use client::{ObjectStorage, SupabaseStorage};
pub use config::StorageConfig;
pub use error::StorageError;
pub use types::{Bucket, BucketSettings, UploadOptions};

#[cfg(test)]
pub use client::MockObjectStorage;
