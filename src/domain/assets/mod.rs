//! Assets module - planning of raster image to WebP conversion.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Source extensions that get a WebP sibling.
pub const CONVERTIBLE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub const WEBP_EXTENSION: &str = "webp";

/// Whether `path` is a raster image the converter handles.
pub fn is_convertible(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CONVERTIBLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// The WebP file written next to `source`.
pub fn webp_target(source: &Path) -> PathBuf {
    source.with_extension(WEBP_EXTENSION)
}

/// Decision for one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionPlan {
    Convert { source: PathBuf, target: PathBuf },
    UpToDate { source: PathBuf, target: PathBuf },
}

impl ConversionPlan {
    /// Plans a conversion. An existing target at least as new as the source
    /// is left alone unless `force` is set.
    pub fn for_source(
        source: &Path,
        source_modified: SystemTime,
        target_modified: Option<SystemTime>,
        force: bool,
    ) -> Self {
        let target = webp_target(source);
        let source = source.to_path_buf();
        match target_modified {
            Some(target_time) if !force && target_time >= source_modified => {
                ConversionPlan::UpToDate { source, target }
            }
            _ => ConversionPlan::Convert { source, target },
        }
    }
}

/// Per-file result of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted {
        source: PathBuf,
        target: PathBuf,
        source_bytes: u64,
        target_bytes: u64,
    },
    Skipped {
        source: PathBuf,
    },
    Failed {
        source: PathBuf,
        reason: String,
    },
}

/// Totals across a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub outcomes: Vec<ConversionOutcome>,
}

impl ConversionSummary {
    pub fn push(&mut self, outcome: ConversionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ConversionOutcome::Converted { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ConversionOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ConversionOutcome::Failed { .. }))
            .count()
    }

    /// Bytes of converted sources and of their WebP output.
    pub fn byte_totals(&self) -> (u64, u64) {
        self.outcomes.iter().fold((0, 0), |(before, after), o| match o {
            ConversionOutcome::Converted {
                source_bytes,
                target_bytes,
                ..
            } => (before + source_bytes, after + target_bytes),
            _ => (before, after),
        })
    }

    /// Percentage of bytes saved by the converted files, 0 when nothing converted.
    pub fn savings_percent(&self) -> f64 {
        let (before, after) = self.byte_totals();
        if before == 0 {
            return 0.0;
        }
        (before as f64 - after as f64) / before as f64 * 100.0
    }
}
