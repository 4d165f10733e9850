//! Supabase REST client.
//!
//! Thin wrapper over `reqwest` holding the project URL and anon key. Queries
//! are built with [`SupabaseClient::from`], which returns a [`PostgrestQuery`]
//! for one table.
//!
//! # Configuration
//!
//! ```ignore
//! let config = SupabaseClientConfig::new("https://abcd.supabase.co", anon_key)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = SupabaseClient::new(config)?;
//! let rows: Vec<AffiliateProfile> = client.from("affiliate_profiles").select("*").execute().await?;
//! ```

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use super::query::PostgrestQuery;
use crate::config::{SupabaseConfig, ValidationError};
use crate::ports::QueryError;

/// Connection settings for one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClientConfig {
    /// Project URL without the `/rest/v1` suffix.
    pub url: String,
    /// Public anon key.
    anon_key: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl SupabaseClientConfig {
    /// Creates a new configuration with the given project URL and anon key.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: Secret::new(anon_key.into()),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds the configuration from validated application settings.
    pub fn from_app_config(config: &SupabaseConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        let url = config.url.clone().unwrap_or_default();
        let key = config.anon_key.clone().unwrap_or_default();
        Ok(Self::new(url, key).with_timeout(config.timeout()))
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the anon key (for making requests).
    pub(crate) fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }
}

/// HTTP client bound to one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseClientConfig,
    http: Client,
}

impl SupabaseClient {
    /// Creates a client with the given configuration.
    pub fn new(config: SupabaseClientConfig) -> Result<Self, QueryError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| QueryError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Starts a query against `table`.
    pub fn from(&self, table: &str) -> PostgrestQuery<'_> {
        PostgrestQuery::new(self, table)
    }

    /// Builds the REST endpoint URL of a table.
    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
    }

    pub(crate) fn config(&self) -> &SupabaseClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
