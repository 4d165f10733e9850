//! Affiliate module - read projections of the external profile tables.

mod pagination;
mod profile;

pub use pagination::PageRequest;
pub use profile::{
    AffiliateProfile, ProfileColumns, ProfileWithSocials, SocialLink, SocialLinkId,
    PROFILE_COLUMNS, SOCIAL_LINK_COLUMNS,
};

/// Table holding one row per affiliate.
pub const PROFILES_TABLE: &str = "affiliate_profiles";

/// Child table of social links, foreign-keyed to a profile.
pub const SOCIAL_LINKS_TABLE: &str = "affiliate_social_links";
