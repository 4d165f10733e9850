//! Image conversion configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Image conversion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Directory searched recursively for PNG/JPEG sources
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Re-encode even when the WebP file is newer than its source
    #[serde(default)]
    pub force: bool,
}

impl ImagesConfig {
    /// Validate image conversion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("IMAGES_SOURCE_DIR"));
        }
        Ok(())
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            force: false,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("public")
}
