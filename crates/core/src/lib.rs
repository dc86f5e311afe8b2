//! Core library for Vitrina, the storefront media toolkit.
//!
//! This crate contains the media-handling logic shared by the storefront
//! application and the `hero-upload` binary:
//!
//! - `storage` - Typed client for the hosted storage HTTP API
//! - `hero` - One-shot hero image publish flow
//! - `preload` - Image preloading with a warm in-memory cache
//! - `catalog` - Product image path guessing and existence probing
//! - `config` - Application configuration

pub mod catalog;
pub mod config;
pub mod hero;
pub mod preload;
pub mod storage;
