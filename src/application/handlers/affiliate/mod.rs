//! Affiliate profile query handlers.

mod get_all_profiles;
mod get_profile_columns;
mod get_profile_with_socials;
mod get_profiles_paginated;

pub use get_all_profiles::{GetAllProfilesHandler, GetAllProfilesQuery};
pub use get_profile_columns::{GetProfileColumnsHandler, GetProfileColumnsQuery};
pub use get_profile_with_socials::{GetProfileWithSocialsHandler, GetProfileWithSocialsQuery};
pub use get_profiles_paginated::{GetProfilesPaginatedHandler, GetProfilesPaginatedQuery};
