//! VerifyBuild - Command handler for the advisory build output scan.
//!
//! Walks the output tree once, runs the scanner over every text artifact and
//! checks the HTML entry file for a Content-Security-Policy. The only fatal
//! condition is a missing output directory; everything else ends up in the
//! report.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::verification::{Artifact, BuildScanner, CspStatus, VerificationReport};
use crate::ports::{FileTree, FileTreeError};

/// Command to verify one build output directory.
#[derive(Debug, Clone)]
pub struct VerifyBuildCommand {
    /// HTML entry file, relative to the output root.
    pub entry_file: PathBuf,
}

impl Default for VerifyBuildCommand {
    fn default() -> Self {
        Self {
            entry_file: PathBuf::from("index.html"),
        }
    }
}

/// Errors that stop a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Build output directory not found: {0}")]
    OutputDirMissing(PathBuf),

    #[error("Failed to list build output: {0}")]
    Listing(#[from] FileTreeError),
}

/// Handler for build verification.
pub struct VerifyBuildHandler {
    tree: Arc<dyn FileTree>,
    scanner: BuildScanner,
}

impl VerifyBuildHandler {
    pub fn new(tree: Arc<dyn FileTree>, scanner: BuildScanner) -> Self {
        Self { tree, scanner }
    }

    pub fn handle(&self, cmd: VerifyBuildCommand) -> Result<VerificationReport, VerificationError> {
        let root = self.tree.root().to_path_buf();
        if !self.tree.exists() {
            return Err(VerificationError::OutputDirMissing(root));
        }

        let mut report = VerificationReport::new(&root);
        let mut files = self.tree.list_files()?;
        files.sort();

        for path in files {
            let artifact = Artifact::classify(path);
            if !artifact.is_text() {
                continue;
            }

            let content = match self.tree.read_text(&artifact.path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", artifact.path.display(), e);
                    continue;
                }
            };

            tracing::debug!("Scanning {}", artifact.path.display());
            report.files_scanned += 1;
            report.findings.extend(self.scanner.scan(&artifact, &content));
        }

        let status = self.check_entry(&cmd.entry_file);
        report.record_csp(&cmd.entry_file, status);

        tracing::info!(
            files = report.files_scanned,
            findings = report.findings.len(),
            "Build verification finished"
        );
        Ok(report)
    }

    fn check_entry(&self, entry_file: &Path) -> CspStatus {
        match self.tree.read_text(entry_file) {
            Ok(content) => CspStatus::check(Some(&content)),
            Err(FileTreeError::NotFound(_)) => CspStatus::check(None),
            Err(e) => {
                tracing::warn!("Could not read entry file {}: {}", entry_file.display(), e);
                CspStatus::check(None)
            }
        }
    }
}
