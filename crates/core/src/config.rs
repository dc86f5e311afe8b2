//! Application configuration management.

use serde::Deserialize;

use crate::catalog::ProbeConfig;
use crate::preload::PreloadConfig;
use crate::storage::StorageConfig;

/// Application configuration.
///
/// Everything has a serde default except the storage endpoint and service
/// key: the credential is a secret with no fallback, so loading fails hard
/// when it is not supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Hosted storage connection settings.
    pub storage: StorageConfig,
    /// Image existence probe settings.
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Preload warm cache settings.
    #[serde(default)]
    pub preload: PreloadConfig,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`
    /// (both optional), then `VITRINA__`-prefixed environment variables,
    /// e.g. `VITRINA__STORAGE__SERVICE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, including when
    /// the storage endpoint or service key is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("VITRINA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
