//! Image Converter Port - raster to WebP encoding.

use std::path::Path;
use thiserror::Error;

/// Encodes one raster image into a WebP file.
pub trait ImageConverter: Send + Sync {
    /// Reads `source`, writes `target`, and returns the byte size of `target`.
    fn convert(&self, source: &Path, target: &Path) -> Result<u64, ConversionError>;
}

/// Errors raised while converting an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("Failed to encode {path}: {reason}")]
    Encode { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}
