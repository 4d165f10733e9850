//! Supabase configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Supabase project configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub url: Option<String>,

    /// Public anon key sent as `apikey` and bearer token
    pub anon_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SupabaseConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a project is configured
    pub fn is_configured(&self) -> bool {
        self.url.as_ref().is_some_and(|u| !u.is_empty())
            && self.anon_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate Supabase configuration
    ///
    /// Only called when the data access layer is built; the build tools run
    /// without a project configured.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ValidationError::MissingRequired("SUPABASE_URL"))?;
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ValidationError::InvalidSupabaseUrl);
        }
        if self.anon_key.as_ref().map_or(true, |k| k.is_empty()) {
            return Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> SupabaseConfig {
        SupabaseConfig {
            url: Some("https://abcd.supabase.co".to_string()),
            anon_key: Some("eyJhbGciOi.anon".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_supabase_config_defaults() {
        let config = SupabaseConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_timeout_duration() {
        let config = SupabaseConfig {
            timeout_secs: 5,
            ..configured()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(configured().is_configured());
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_url() {
        let config = SupabaseConfig {
            url: None,
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("SUPABASE_URL"))
        ));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = SupabaseConfig {
            url: Some("postgresql://localhost/test".to_string()),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSupabaseUrl)
        ));
    }

    #[test]
    fn test_validation_missing_key() {
        let config = SupabaseConfig {
            anon_key: Some(String::new()),
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = SupabaseConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
