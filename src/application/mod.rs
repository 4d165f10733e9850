//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries read the affiliate tables; commands drive the build tools.

pub mod handlers;

pub use handlers::{
    // Affiliate profile queries
    GetAllProfilesHandler, GetAllProfilesQuery,
    GetProfileColumnsHandler, GetProfileColumnsQuery,
    GetProfileWithSocialsHandler, GetProfileWithSocialsQuery,
    GetProfilesPaginatedHandler, GetProfilesPaginatedQuery,
    // Build tools
    ConvertImagesCommand, ConvertImagesHandler, ImageConversionError,
    VerificationError, VerifyBuildCommand, VerifyBuildHandler,
};
