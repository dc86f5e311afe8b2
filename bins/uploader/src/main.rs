//! Hero image uploader for Vitrina.
//!
//! One-shot: ensures the hero bucket exists, uploads the hero background
//! image with overwrite semantics, and prints its public URL.
//!
//! Usage: hero-upload [SOURCE]
//!
//! SOURCE defaults to `assets/hero-bg.jpg`. Configuration comes from
//! `config/*` files and `VITRINA__`-prefixed environment variables
//! (`VITRINA__STORAGE__ENDPOINT`, `VITRINA__STORAGE__SERVICE_KEY`); a
//! `.env` file is honored. Exits 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrina_core::config::AppConfig;
use vitrina_core::hero::{self, publish_hero_image};
use vitrina_core::storage::SupabaseStorage;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(url) => {
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("hero-upload failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<String> {
    let source = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(hero::DEFAULT_SOURCE), PathBuf::from);

    let config = AppConfig::load().context("failed to load configuration")?;
    info!(endpoint = %config.storage.endpoint, "storage configured");
    let storage = SupabaseStorage::new(config.storage)?;

    let url = publish_hero_image(&storage, &source).await?;
    Ok(url)
}
