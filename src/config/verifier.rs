//! Build verifier configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::verification::{DomainAllowList, DEFAULT_ALLOWED_DOMAINS};

/// Build verifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VerifierConfig {
    /// Build output directory to scan
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML entry file checked for a Content-Security-Policy, relative to `output_dir`
    #[serde(default = "default_entry_file")]
    pub entry_file: PathBuf,

    /// Allowed external domains (comma-separated), replaces the defaults when set
    pub allowed_domains: Option<String>,

    /// Fail the run on error-severity findings
    #[serde(default)]
    pub strict: bool,
}

impl VerifierConfig {
    /// Get allowed domains as an allow-list
    pub fn allow_list(&self) -> DomainAllowList {
        match &self.allowed_domains {
            Some(list) => DomainAllowList::new(list.split(',')),
            None => DomainAllowList::default(),
        }
    }

    /// Validate verifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("VERIFIER_OUTPUT_DIR"));
        }
        if self.entry_file.as_os_str().is_empty() || self.entry_file.is_absolute() {
            return Err(ValidationError::InvalidEntryFile);
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            entry_file: default_entry_file(),
            allowed_domains: None,
            strict: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_entry_file() -> PathBuf {
    PathBuf::from("index.html")
}
