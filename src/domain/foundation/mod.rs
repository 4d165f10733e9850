//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the site tooling domain.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::Username;
