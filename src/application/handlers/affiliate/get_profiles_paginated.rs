//! GetProfilesPaginated - Query handler for one page of affiliate profiles.

use std::sync::Arc;

use crate::domain::affiliate::{AffiliateProfile, PageRequest};
use crate::ports::{AffiliateProfileReader, QueryResult};

/// Query for one page of profiles. Defaults to page 1 of 10.
#[derive(Debug, Clone, Default)]
pub struct GetProfilesPaginatedQuery {
    pub page: PageRequest,
}

/// Handler for paginated profile listing.
pub struct GetProfilesPaginatedHandler {
    reader: Arc<dyn AffiliateProfileReader>,
}

impl GetProfilesPaginatedHandler {
    pub fn new(reader: Arc<dyn AffiliateProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetProfilesPaginatedQuery,
    ) -> QueryResult<Vec<AffiliateProfile>> {
        let (start, end) = query.page.range();
        tracing::debug!(
            page = query.page.page,
            page_size = query.page.page_size,
            start,
            end,
            "Fetching profile page"
        );
        self.reader.get_profiles_paginated(query.page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAffiliateProfileReader;
    use serde_json::json;

    fn handler(rows: usize) -> GetProfilesPaginatedHandler {
        let reader = (0..rows).fold(InMemoryAffiliateProfileReader::new(), |r, i| {
            r.with_profile(json!({"username": format!("affiliate{}", i)}))
        });
        GetProfilesPaginatedHandler::new(Arc::new(reader))
    }

    #[tokio::test]
    async fn test_default_query_is_first_ten() {
        let page = handler(15)
            .handle(GetProfilesPaginatedQuery::default())
            .await
            .unwrap();

        assert_eq!(page.len(), 10);
        assert_eq!(page[0].username.as_str(), "affiliate0");
    }

    #[tokio::test]
    async fn test_second_page_starts_at_offset() {
        let page = handler(30)
            .handle(GetProfilesPaginatedQuery {
                page: PageRequest::new(2, 10),
            })
            .await
            .unwrap();

        let names: Vec<&str> = page.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names.first(), Some(&"affiliate10"));
        assert_eq!(names.last(), Some(&"affiliate19"));
    }
}
