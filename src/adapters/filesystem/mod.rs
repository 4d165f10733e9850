//! Filesystem adapters

mod local_tree;

pub use local_tree::LocalFileTree;
