//! Classification of files found in the build output.

use std::path::{Component, Path, PathBuf};

/// Extensions of emitted script bundles.
pub const SCRIPT_EXTENSIONS: [&str; 3] = ["js", "mjs", "cjs"];

/// Extensions of emitted markup.
pub const MARKUP_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Path components that mark third-party code.
const VENDOR_COMPONENTS: [&str; 3] = ["node_modules", "third_party", "third-party"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Script,
    Markup,
    Other,
}

/// A file of the build output, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub vendored: bool,
}

impl Artifact {
    pub fn classify(relative: impl Into<PathBuf>) -> Self {
        let path = relative.into();
        let kind = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
        {
            Some(ext) if SCRIPT_EXTENSIONS.contains(&ext.as_str()) => ArtifactKind::Script,
            Some(ext) if MARKUP_EXTENSIONS.contains(&ext.as_str()) => ArtifactKind::Markup,
            _ => ArtifactKind::Other,
        };
        let vendored = is_vendored(&path);
        Self {
            path,
            kind,
            vendored,
        }
    }

    /// Whether the file's text is scanned at all.
    pub fn is_text(&self) -> bool {
        self.kind != ArtifactKind::Other
    }

    /// Whether the file is first-party script output.
    pub fn is_own_script(&self) -> bool {
        self.kind == ArtifactKind::Script && !self.vendored
    }
}

// Bundlers name split chunks `vendor-<hash>.js`, so a prefix match is used.
fn is_vendored(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_str().is_some_and(|name| {
            let name = name.to_ascii_lowercase();
            name.starts_with("vendor") || VENDOR_COMPONENTS.contains(&name.as_str())
        }),
        _ => false,
    })
}
