//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Access Ports
//!
//! - `AffiliateProfileReader` - Read-only queries over the affiliate profile tables
//!
//! ## Build Tooling Ports
//!
//! - `FileTree` - Enumeration, text reads and metadata of a directory tree
//! - `ImageConverter` - Raster image to WebP encoding

mod affiliate_profile_reader;
mod file_tree;
mod image_converter;

pub use affiliate_profile_reader::{
    AffiliateProfileReader, PostgrestError, QueryError, QueryResult, SINGLE_ROW_VIOLATION,
};
pub use file_tree::{FileTree, FileTreeError};
pub use image_converter::{ConversionError, ImageConverter};
