//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `affiliate` - Affiliate profile rows, social links and pagination
//! - `verification` - Build output scan rules, findings and reports
//! - `assets` - Raster image to WebP conversion planning

pub mod affiliate;
pub mod assets;
pub mod foundation;
pub mod verification;
