//! Application handlers.
//!
//! Query handlers for the affiliate profile tables and command handlers for
//! the build tools.

pub mod affiliate;
pub mod assets;
pub mod verification;

pub use affiliate::{
    GetAllProfilesHandler, GetAllProfilesQuery, GetProfileColumnsHandler,
    GetProfileColumnsQuery, GetProfileWithSocialsHandler, GetProfileWithSocialsQuery,
    GetProfilesPaginatedHandler, GetProfilesPaginatedQuery,
};
pub use assets::{ConvertImagesCommand, ConvertImagesHandler, ImageConversionError};
pub use verification::{VerificationError, VerifyBuildCommand, VerifyBuildHandler};
