//! File Tree Port - read access to a directory of build or asset files.
//!
//! Both build tools work on a directory tree: the verifier reads the text of
//! emitted bundles, the image converter looks at source timestamps and sizes.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Read access to the files under one root directory.
///
/// # Contract
///
/// Paths handed out and accepted are relative to [`FileTree::root`].
/// Listing is recursive and its order is unspecified.
pub trait FileTree: Send + Sync {
    /// The directory this tree reads from.
    fn root(&self) -> &Path;

    /// Whether the root exists and is a directory.
    fn exists(&self) -> bool;

    /// Every file under the root, recursively.
    fn list_files(&self) -> Result<Vec<PathBuf>, FileTreeError>;

    /// Full text of one file.
    ///
    /// # Errors
    ///
    /// Returns `FileTreeError::NotFound` if the file doesn't exist and
    /// `FileTreeError::NotText` if it is not valid UTF-8.
    fn read_text(&self, relative: &Path) -> Result<String, FileTreeError>;

    /// Last modification time, `None` if the file doesn't exist.
    fn modified(&self, relative: &Path) -> Result<Option<SystemTime>, FileTreeError>;

    /// Size in bytes.
    fn size(&self, relative: &Path) -> Result<u64, FileTreeError>;
}

/// Errors raised while reading a file tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileTreeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not a text file: {0}")]
    NotText(String),

    #[error("IO error: {0}")]
    IoError(String),
}
