//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `NEXORA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use nexora::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("API at {}", config.api.base_url);
//! ```

mod api;
mod billing;
mod dataset;
mod error;
mod storage;

pub use api::ApiConfig;
pub use billing::BillingConfig;
pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with an empty environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// REST backend (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Billing collaborator routes
    #[serde(default)]
    pub billing: BillingConfig,

    /// Client-local state and media
    #[serde(default)]
    pub storage: StorageConfig,

    /// Q/A dataset generator
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NEXORA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `NEXORA__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `NEXORA__DATASET__TRAIN_MIN_PAIRS=1000` -> `dataset.train_min_pairs = 1000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NEXORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.billing.validate()?;
        self.storage.validate()?;
        self.dataset.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("NEXORA__API__BASE_URL");
        env::remove_var("NEXORA__API__REQUEST_TIMEOUT_SECS");
        env::remove_var("NEXORA__DATASET__TRAIN_MIN_PAIRS");
        env::remove_var("NEXORA__DATASET__BRAND");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5001/api");
        assert_eq!(config.dataset.train_min_pairs, 520);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        env::set_var("NEXORA__API__BASE_URL", "https://api.nexora.test");
        env::set_var("NEXORA__API__REQUEST_TIMEOUT_SECS", "5");
        env::set_var("NEXORA__DATASET__TRAIN_MIN_PAIRS", "40");
        env::set_var("NEXORA__DATASET__BRAND", "Acme");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://api.nexora.test");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.dataset.train_min_pairs, 40);
        assert_eq!(config.dataset.brand, "Acme");
    }

    #[test]
    fn test_validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.billing.checkout_path = "checkout".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPath("NEXORA__BILLING__CHECKOUT_PATH"))
        );
    }
}
