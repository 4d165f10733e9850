//! Content-Security-Policy presence check on the HTML entry file.

use serde::Serialize;

/// Literal looked for in the entry file, as a meta `http-equiv` or header hint.
pub const CSP_MARKER: &str = "Content-Security-Policy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CspStatus {
    Present,
    Missing,
    /// The entry file does not exist, so nothing was checked.
    EntryNotFound,
}

impl CspStatus {
    /// Status for the entry file content, `None` when the file is absent.
    pub fn check(entry_content: Option<&str>) -> Self {
        match entry_content {
            Some(content) if content.contains(CSP_MARKER) => CspStatus::Present,
            Some(_) => CspStatus::Missing,
            None => CspStatus::EntryNotFound,
        }
    }
}
