//! GetProfileWithSocials - Query handler for a profile and its social links.

use std::sync::Arc;

use crate::domain::affiliate::ProfileWithSocials;
use crate::domain::foundation::Username;
use crate::ports::{AffiliateProfileReader, QueryResult};

/// Query for one full profile with embedded social links.
#[derive(Debug, Clone)]
pub struct GetProfileWithSocialsQuery {
    pub username: Username,
}

/// Handler for the profile-with-socials lookup.
///
/// Links come back in the store's join order. Use
/// [`ProfileWithSocials::links_by_position`] for display order.
pub struct GetProfileWithSocialsHandler {
    reader: Arc<dyn AffiliateProfileReader>,
}

impl GetProfileWithSocialsHandler {
    pub fn new(reader: Arc<dyn AffiliateProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetProfileWithSocialsQuery,
    ) -> QueryResult<ProfileWithSocials> {
        tracing::debug!(username = %query.username, "Fetching profile with social links");
        self.reader.get_profile_with_socials(&query.username).await
    }
}
