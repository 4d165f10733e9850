//! Affiliate profile rows and their social links.
//!
//! These are read projections of rows owned by the external database. Nothing
//! in this crate creates or mutates them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::domain::foundation::Username;

/// Columns projected by the narrow profile lookup.
pub const PROFILE_COLUMNS: [&str; 4] = ["username", "pfp_url", "about", "why_zantaku"];

/// Columns of the embedded social link relation.
pub const SOCIAL_LINK_COLUMNS: [&str; 4] = ["id", "platform_name", "url", "position"];

/// A full row of the `affiliate_profiles` table.
///
/// Known display columns are typed; every other column the table returns is
/// kept verbatim in `extra` so `select=*` loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateProfile {
    pub username: Username,
    #[serde(default)]
    pub pfp_url: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub why_zantaku: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Exactly the four columns returned by the narrow profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileColumns {
    pub username: Username,
    pub pfp_url: Option<String>,
    pub about: Option<String>,
    pub why_zantaku: Option<String>,
}

/// Primary key of a social link row. The table may use integer or text keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialLinkId {
    Int(i64),
    Text(String),
}

impl fmt::Display for SocialLinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialLinkId::Int(id) => write!(f, "{}", id),
            SocialLinkId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A row of `affiliate_social_links`, one external platform URL of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: SocialLinkId,
    pub platform_name: String,
    pub url: String,
    pub position: i32,
}

/// A profile row with its social links embedded.
///
/// Links keep the order the backing store joined them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileWithSocials {
    #[serde(flatten)]
    pub profile: AffiliateProfile,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub affiliate_social_links: Vec<SocialLink>,
}

impl ProfileWithSocials {
    /// Social links sorted by their `position` column. Ties keep join order.
    pub fn links_by_position(&self) -> Vec<&SocialLink> {
        let mut links: Vec<&SocialLink> = self.affiliate_social_links.iter().collect();
        links.sort_by_key(|link| link.position);
        links
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SocialLink>>::deserialize(deserializer)?.unwrap_or_default())
}
