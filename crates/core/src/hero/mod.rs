//! One-shot hero image publish flow.
//!
//! The storefront's landing page background lives at a fixed key in a fixed
//! public bucket. Publishing is idempotent: the bucket is created on first
//! run and reused afterwards, and the object is overwritten on every run.

mod error;
mod service;

pub use error::HeroError;
pub use service::{
    publish_hero_image, DEFAULT_SOURCE, HERO_BUCKET, HERO_CONTENT_TYPE, HERO_OBJECT_KEY,
};
