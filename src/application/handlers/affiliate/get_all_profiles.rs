//! GetAllProfiles - Query handler for listing every affiliate profile.

use std::sync::Arc;

use crate::domain::affiliate::AffiliateProfile;
use crate::ports::{AffiliateProfileReader, QueryResult};

/// Query to list every profile row, unfiltered.
#[derive(Debug, Clone, Default)]
pub struct GetAllProfilesQuery;

/// Handler for listing all profiles.
pub struct GetAllProfilesHandler {
    reader: Arc<dyn AffiliateProfileReader>,
}

impl GetAllProfilesHandler {
    pub fn new(reader: Arc<dyn AffiliateProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, _query: GetAllProfilesQuery) -> QueryResult<Vec<AffiliateProfile>> {
        tracing::debug!("Listing all affiliate profiles");
        self.reader.get_all_profiles().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAffiliateProfileReader;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_all_profiles() {
        let reader = InMemoryAffiliateProfileReader::new()
            .with_profile(json!({"username": "mika", "about": "seasonal watcher"}))
            .with_profile(json!({"username": "ren", "why_zantaku": "manga tracking"}));
        let handler = GetAllProfilesHandler::new(Arc::new(reader));

        let profiles = handler.handle(GetAllProfilesQuery).await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].why_zantaku.as_deref(), Some("manga tracking"));
    }

    #[tokio::test]
    async fn test_get_all_profiles_empty_table() {
        let handler = GetAllProfilesHandler::new(Arc::new(InMemoryAffiliateProfileReader::new()));

        let profiles = handler.handle(GetAllProfilesQuery).await.unwrap();

        assert!(profiles.is_empty());
    }
}
