//! Image preloading.
//!
//! The storefront warms images it is about to show (hero backgrounds, first
//! product cards) before they are requested. A [`PreloadSession`] is one
//! activation: it selects at most `max_images` non-empty URLs in input
//! order, spawns a fetch task per URL, and exposes a [`PreloadHandle`] per
//! task for inspection. Fetched bodies land in a bounded warm cache.
//!
//! Dropping a session aborts exactly the fetch tasks that session started,
//! mirroring an effect cleanup: nothing from a previous activation survives
//! once it is dropped, and already-completed fetches stay in the cache the
//! way a browser cache outlives its preload hints.

mod fetcher;
mod service;
mod types;

pub use fetcher::{FetchError, HttpImageFetcher, ImageFetcher};
pub use service::{ImagePreloader, PreloadSession};
pub use types::{PreloadConfig, PreloadHandle, PreloadOptions, Priority};
