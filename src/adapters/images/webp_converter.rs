//! WebP converter backed by the `image` crate.
//!
//! Encodes lossless WebP. Sources are normalized to 8-bit RGBA first, since the
//! encoder only accepts 8-bit RGB(A) input.

use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::Path;

use crate::ports::{ConversionError, ImageConverter};

/// Raster to WebP converter.
///
/// Writes to `<target>.tmp` and renames into place so an interrupted run
/// never leaves a truncated `.webp` next to the source.
#[derive(Debug, Clone, Default)]
pub struct WebpConverter;

impl WebpConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageConverter for WebpConverter {
    fn convert(&self, source: &Path, target: &Path) -> Result<u64, ConversionError> {
        let decoded = image::open(source).map_err(|e| ConversionError::Decode {
            path: source.display().to_string(),
            reason: e.to_string(),
        })?;
        let rgba = DynamicImage::ImageRgba8(decoded.to_rgba8());

        let temp_path = target.with_extension("webp.tmp");
        rgba.save_with_format(&temp_path, ImageFormat::WebP)
            .map_err(|e| {
                let _ = fs::remove_file(&temp_path);
                ConversionError::Encode {
                    path: target.display().to_string(),
                    reason: e.to_string(),
                }
            })?;

        fs::rename(&temp_path, target).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ConversionError::IoError(format!("Failed to rename file: {}", e))
        })?;

        fs::metadata(target)
            .map(|meta| meta.len())
            .map_err(|e| ConversionError::IoError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn test_converts_png_to_webp() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("hero.png");
        let target = temp_dir.path().join("hero.webp");
        ImageBuffer::from_pixel(16, 16, Rgb([200u8, 30, 90]))
            .save(&source)
            .unwrap();

        let bytes = WebpConverter::new().convert(&source, &target).unwrap();

        assert!(bytes > 0);
        assert_eq!(fs::metadata(&target).unwrap().len(), bytes);
        assert!(!temp_dir.path().join("hero.webp.tmp").exists());
        let decoded = image::open(&target).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("hero.png");
        let target = temp_dir.path().join("hero.webp");
        ImageBuffer::from_pixel(4, 4, Rgb([1u8, 2, 3]))
            .save(&source)
            .unwrap();
        // A non-empty directory at the target path makes the rename fail.
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let result = WebpConverter::new().convert(&source, &target);

        assert!(matches!(result, Err(ConversionError::IoError(_))));
        assert!(!temp_dir.path().join("hero.webp.tmp").exists());
    }

    #[test]
    fn test_undecodable_source_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();

        let result = WebpConverter::new().convert(&source, &temp_dir.path().join("broken.webp"));

        assert!(matches!(result, Err(ConversionError::Decode { .. })));
        assert!(!temp_dir.path().join("broken.webp").exists());
    }
}
