//! GetProfileColumns - Query handler for the narrow four-column profile lookup.

use std::sync::Arc;

use crate::domain::affiliate::ProfileColumns;
use crate::domain::foundation::Username;
use crate::ports::{AffiliateProfileReader, QueryResult};

/// Query for the display columns of one profile.
#[derive(Debug, Clone)]
pub struct GetProfileColumnsQuery {
    pub username: Username,
}

/// Handler for the four-column profile lookup.
pub struct GetProfileColumnsHandler {
    reader: Arc<dyn AffiliateProfileReader>,
}

impl GetProfileColumnsHandler {
    pub fn new(reader: Arc<dyn AffiliateProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetProfileColumnsQuery) -> QueryResult<ProfileColumns> {
        tracing::debug!(username = %query.username, "Fetching profile columns");
        self.reader.get_profile_columns(&query.username).await
    }
}
