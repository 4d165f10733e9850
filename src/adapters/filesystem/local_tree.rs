//! Local filesystem adapter for FileTree

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::ports::{FileTree, FileTreeError};

/// Filesystem-backed file tree rooted at one directory.
#[derive(Debug, Clone)]
pub struct LocalFileTree {
    root: PathBuf,
}

impl LocalFileTree {
    /// Create a tree over `root`. The directory need not exist yet.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn io_error(path: &Path, e: std::io::Error) -> FileTreeError {
        match e.kind() {
            ErrorKind::NotFound => FileTreeError::NotFound(path.display().to_string()),
            _ => FileTreeError::IoError(format!("{}: {}", path.display(), e)),
        }
    }

    /// Depth-first collection of regular files below `dir`.
    ///
    /// Symlinked directories are not followed so a link cycle cannot recurse.
    fn collect(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), FileTreeError> {
        let entries = fs::read_dir(dir).map_err(|e| Self::io_error(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Self::io_error(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Self::io_error(&path, e))?;

            if file_type.is_dir() {
                self.collect(&path, files)?;
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                if let Ok(relative) = path.strip_prefix(&self.root) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        Ok(())
    }
}

impl FileTree for LocalFileTree {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        self.root.is_dir()
    }

    fn list_files(&self) -> Result<Vec<PathBuf>, FileTreeError> {
        let mut files = Vec::new();
        self.collect(&self.root, &mut files)?;
        tracing::debug!("Found {} files under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn read_text(&self, relative: &Path) -> Result<String, FileTreeError> {
        let path = self.resolve(relative);
        let bytes = fs::read(&path).map_err(|e| Self::io_error(&path, e))?;
        String::from_utf8(bytes).map_err(|_| FileTreeError::NotText(path.display().to_string()))
    }

    fn modified(&self, relative: &Path) -> Result<Option<SystemTime>, FileTreeError> {
        let path = self.resolve(relative);
        match fs::metadata(&path) {
            Ok(meta) => meta
                .modified()
                .map(Some)
                .map_err(|e| Self::io_error(&path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }

    fn size(&self, relative: &Path) -> Result<u64, FileTreeError> {
        let path = self.resolve(relative);
        fs::metadata(&path)
            .map(|meta| meta.len())
            .map_err(|e| Self::io_error(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree_with_files() -> (TempDir, LocalFileTree) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("assets/nested")).unwrap();
        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::write(root.join("assets/app.js"), "let a = 1;").unwrap();
        fs::write(root.join("assets/nested/deep.js"), "let b = 2;").unwrap();
        let tree = LocalFileTree::new(root);
        (temp_dir, tree)
    }

    #[test]
    fn test_exists() {
        let (temp_dir, tree) = tree_with_files();
        assert!(tree.exists());
        assert!(!LocalFileTree::new(temp_dir.path().join("missing")).exists());
    }

    #[test]
    fn test_list_files_recursively_with_relative_paths() {
        let (_temp_dir, tree) = tree_with_files();
        let mut files = tree.list_files().unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                PathBuf::from("assets/app.js"),
                PathBuf::from("assets/nested/deep.js"),
                PathBuf::from("index.html"),
            ]
        );
    }

    #[test]
    fn test_list_files_of_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let tree = LocalFileTree::new(temp_dir.path().join("missing"));
        assert!(matches!(tree.list_files(), Err(FileTreeError::NotFound(_))));
    }

    #[test]
    fn test_read_text() {
        let (_temp_dir, tree) = tree_with_files();
        assert_eq!(tree.read_text(Path::new("assets/app.js")).unwrap(), "let a = 1;");
    }

    #[test]
    fn test_read_nonexistent() {
        let (_temp_dir, tree) = tree_with_files();
        let result = tree.read_text(Path::new("nope.js"));
        assert!(matches!(result, Err(FileTreeError::NotFound(_))));
    }

    #[test]
    fn test_read_binary_is_not_text() {
        let (temp_dir, tree) = tree_with_files();
        fs::write(temp_dir.path().join("blob.js"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let result = tree.read_text(Path::new("blob.js"));
        assert!(matches!(result, Err(FileTreeError::NotText(_))));
    }

    #[test]
    fn test_modified_and_size() {
        let (_temp_dir, tree) = tree_with_files();
        assert!(tree.modified(Path::new("index.html")).unwrap().is_some());
        assert_eq!(tree.modified(Path::new("absent.png")).unwrap(), None);
        assert_eq!(tree.size(Path::new("index.html")).unwrap(), 13);
    }
}
