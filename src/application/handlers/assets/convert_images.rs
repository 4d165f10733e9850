//! ConvertImages - Command handler for the WebP conversion pass.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::assets::{
    is_convertible, webp_target, ConversionOutcome, ConversionPlan, ConversionSummary,
};
use crate::ports::{FileTree, FileTreeError, ImageConverter};

/// Command to convert every raster image under the tree.
#[derive(Debug, Clone, Default)]
pub struct ConvertImagesCommand {
    /// Re-encode even when the WebP sibling is up to date.
    pub force: bool,
}

/// Errors that stop a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageConversionError {
    #[error("Image source directory not found: {0}")]
    SourceDirMissing(String),

    #[error("Failed to list images: {0}")]
    Listing(#[from] FileTreeError),
}

/// Handler for WebP conversion.
///
/// A failure on one image is recorded in the summary and the run goes on.
pub struct ConvertImagesHandler {
    tree: Arc<dyn FileTree>,
    converter: Arc<dyn ImageConverter>,
}

impl ConvertImagesHandler {
    pub fn new(tree: Arc<dyn FileTree>, converter: Arc<dyn ImageConverter>) -> Self {
        Self { tree, converter }
    }

    pub fn handle(
        &self,
        cmd: ConvertImagesCommand,
    ) -> Result<ConversionSummary, ImageConversionError> {
        if !self.tree.exists() {
            return Err(ImageConversionError::SourceDirMissing(
                self.tree.root().display().to_string(),
            ));
        }

        let mut sources: Vec<_> = self
            .tree
            .list_files()?
            .into_iter()
            .filter(|path| is_convertible(path))
            .collect();
        sources.sort();

        // Sorted order decides which source owns a shared `.webp` target.
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
        let mut summary = ConversionSummary::default();
        for source in sources {
            let target = webp_target(&source);
            if let Some(owner) = claimed.get(&target) {
                tracing::warn!(
                    "{} and {} both map to {}",
                    owner.display(),
                    source.display(),
                    target.display()
                );
                summary.push(ConversionOutcome::Failed {
                    reason: format!(
                        "{} is already written from {}",
                        target.display(),
                        owner.display()
                    ),
                    source,
                });
                continue;
            }
            claimed.insert(target, source.clone());
            summary.push(self.convert_one(&source, cmd.force));
        }

        tracing::info!(
            converted = summary.converted(),
            skipped = summary.skipped(),
            failed = summary.failed(),
            "Image conversion finished"
        );
        Ok(summary)
    }

    fn convert_one(&self, source: &Path, force: bool) -> ConversionOutcome {
        let failed = |reason: String| ConversionOutcome::Failed {
            source: source.to_path_buf(),
            reason,
        };

        let source_modified = match self.tree.modified(source) {
            Ok(Some(time)) => time,
            Ok(None) => return failed("source disappeared".to_string()),
            Err(e) => return failed(e.to_string()),
        };
        let target_modified = match self.tree.modified(&webp_target(source)) {
            Ok(time) => time,
            Err(e) => return failed(e.to_string()),
        };

        let (source, target) =
            match ConversionPlan::for_source(source, source_modified, target_modified, force) {
                ConversionPlan::UpToDate { source, .. } => {
                    tracing::debug!("{} is up to date", source.display());
                    return ConversionOutcome::Skipped { source };
                }
                ConversionPlan::Convert { source, target } => (source, target),
            };

        let source_bytes = match self.tree.size(&source) {
            Ok(bytes) => bytes,
            Err(e) => return failed(e.to_string()),
        };

        let root = self.tree.root();
        match self
            .converter
            .convert(&root.join(&source), &root.join(&target))
        {
            Ok(target_bytes) => {
                tracing::debug!(
                    "Converted {} ({} -> {} bytes)",
                    source.display(),
                    source_bytes,
                    target_bytes
                );
                ConversionOutcome::Converted {
                    source,
                    target,
                    source_bytes,
                    target_bytes,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to convert {}: {}", source.display(), e);
                failed(e.to_string())
            }
        }
    }
}
