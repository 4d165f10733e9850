//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ZANTAKU_` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so the build tools run with no environment at
//! all. The Supabase section is only validated when the data access layer is
//! constructed.
//!
//! # Example
//!
//! ```no_run
//! use zantaku_site_tools::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scanning {}", config.verifier.output_dir.display());
//! ```

mod error;
mod images;
mod supabase;
mod verifier;

pub use error::{ConfigError, ValidationError};
pub use images::ImagesConfig;
pub use supabase::SupabaseConfig;
pub use verifier::VerifierConfig;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,

    /// Supabase project (affiliate profile queries)
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Build output verifier
    #[serde(default)]
    pub verifier: VerifierConfig,

    /// WebP image conversion
    #[serde(default)]
    pub images: ImagesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ZANTAKU` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ZANTAKU__VERIFIER__OUTPUT_DIR=build` -> `verifier.output_dir = build`
    /// - `ZANTAKU__SUPABASE__URL=...` -> `supabase.url = ...`
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
                    .prefix("ZANTAKU")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate the sections every tool relies on
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ValidationError::InvalidLogLevel(self.log_level.clone()))?;
        self.verifier.validate()?;
        self.images.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            supabase: SupabaseConfig::default(),
            verifier: VerifierConfig::default(),
            images: ImagesConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
