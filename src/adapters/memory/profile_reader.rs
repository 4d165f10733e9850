//! In-memory affiliate profile reader.
//!
//! This adapter provides an in-memory implementation of the
//! `AffiliateProfileReader` port with the same result semantics as the
//! Supabase adapter. Useful for:
//! - Unit and integration tests of code that consumes profiles
//! - Local development without a Supabase project
//!
//! # Example
//!
//! ```ignore
//! let reader = InMemoryAffiliateProfileReader::new()
//!     .with_profile(json!({"username": "mika", "about": "hi"}))
//!     .with_link("mika", json!({"id": 1, "platform_name": "x", "url": "https://x.com/mika", "position": 0}));
//!
//! let profile = reader.get_profile_with_socials(&Username::new("mika")?).await?;
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::domain::affiliate::{
    AffiliateProfile, PageRequest, ProfileColumns, ProfileWithSocials, PROFILE_COLUMNS,
    SOCIAL_LINKS_TABLE,
};
use crate::domain::foundation::Username;
use crate::ports::{
    AffiliateProfileReader, PostgrestError, QueryError, QueryResult, SINGLE_ROW_VIOLATION,
};

/// In-memory implementation of the AffiliateProfileReader port.
///
/// Rows are held as raw JSON objects in insertion order, which is also the
/// "default order" listings return.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAffiliateProfileReader {
    profiles: Vec<Map<String, Value>>,
    links: HashMap<String, Vec<Value>>,
}

impl InMemoryAffiliateProfileReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a profile row. Non-object values are ignored.
    pub fn with_profile(mut self, row: Value) -> Self {
        if let Value::Object(row) = row {
            self.profiles.push(row);
        }
        self
    }

    /// Adds a social link row belonging to `username`.
    pub fn with_link(mut self, username: &str, link: Value) -> Self {
        self.links.entry(username.to_string()).or_default().push(link);
        self
    }

    fn matching(&self, username: &Username) -> Vec<&Map<String, Value>> {
        self.profiles
            .iter()
            .filter(|row| row.get("username").and_then(Value::as_str) == Some(username.as_str()))
            .collect()
    }

    /// Exactly one row for `username`, or the store's single-row error.
    fn single(&self, username: &Username) -> QueryResult<&Map<String, Value>> {
        let rows = self.matching(username);
        if rows.len() != 1 {
            return Err(QueryError::Api {
                status: 406,
                error: PostgrestError {
                    code: Some(SINGLE_ROW_VIOLATION.to_string()),
                    message: "JSON object requested, multiple (or no) rows returned".to_string(),
                    details: Some(format!("The result contains {} rows", rows.len())),
                    hint: None,
                },
            });
        }
        Ok(rows[0])
    }

    fn decode<T: DeserializeOwned>(value: Value) -> QueryResult<T> {
        serde_json::from_value(value).map_err(|e| QueryError::Decode(e.to_string()))
    }

    fn decode_rows<'a>(
        rows: impl Iterator<Item = &'a Map<String, Value>>,
    ) -> QueryResult<Vec<AffiliateProfile>> {
        rows.map(|row| Self::decode(Value::Object(row.clone())))
            .collect()
    }
}

#[async_trait]
impl AffiliateProfileReader for InMemoryAffiliateProfileReader {
    async fn get_all_profiles(&self) -> QueryResult<Vec<AffiliateProfile>> {
        Self::decode_rows(self.profiles.iter())
    }

    async fn get_profile_columns(&self, username: &Username) -> QueryResult<ProfileColumns> {
        let row = self.single(username)?;
        let projected: Map<String, Value> = PROFILE_COLUMNS
            .iter()
            .map(|column| {
                let value = row.get(*column).cloned().unwrap_or(Value::Null);
                (column.to_string(), value)
            })
            .collect();
        Self::decode(Value::Object(projected))
    }

    async fn get_profile_with_socials(
        &self,
        username: &Username,
    ) -> QueryResult<ProfileWithSocials> {
        let mut row = self.single(username)?.clone();
        let links = self.links.get(username.as_str()).cloned().unwrap_or_default();
        row.insert(SOCIAL_LINKS_TABLE.to_string(), Value::Array(links));
        Self::decode(Value::Object(row))
    }

    // Out-of-bounds or inverted ranges yield an empty page.
    async fn get_profiles_paginated(
        &self,
        page: PageRequest,
    ) -> QueryResult<Vec<AffiliateProfile>> {
        let (start, end) = page.range();
        if end < start || end < 0 {
            return Ok(Vec::new());
        }
        let skip = start.max(0) as usize;
        let take = end.saturating_sub(start.max(0)).saturating_add(1) as usize;
        Self::decode_rows(self.profiles.iter().skip(skip).take(take))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reader_with(count: usize) -> InMemoryAffiliateProfileReader {
        (0..count).fold(InMemoryAffiliateProfileReader::new(), |reader, i| {
            reader.with_profile(json!({"username": format!("user{}", i)}))
        })
    }

    fn name(s: &str) -> Username {
        Username::new(s).unwrap()
    }

    #[tokio::test]
    async fn lists_rows_in_insertion_order() {
        let profiles = reader_with(3).get_all_profiles().await.unwrap();
        let names: Vec<&str> = profiles.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, vec!["user0", "user1", "user2"]);
    }

    #[tokio::test]
    async fn projects_only_the_four_columns() {
        let reader = InMemoryAffiliateProfileReader::new().with_profile(json!({
            "username": "mika",
            "about": "hi",
            "pfp_url": "https://cdn.zantaku.com/m.png",
            "created_at": "2024-01-01"
        }));

        let columns = reader.get_profile_columns(&name("mika")).await.unwrap();
        assert_eq!(columns.about.as_deref(), Some("hi"));
        assert_eq!(columns.why_zantaku, None);
    }

    #[tokio::test]
    async fn missing_and_duplicate_rows_violate_single() {
        let reader = InMemoryAffiliateProfileReader::new()
            .with_profile(json!({"username": "twin"}))
            .with_profile(json!({"username": "twin"}));

        let missing = reader.get_profile_columns(&name("ghost")).await.unwrap_err();
        let duplicate = reader.get_profile_with_socials(&name("twin")).await.unwrap_err();

        assert!(missing.is_single_row_violation());
        assert!(duplicate.is_single_row_violation());
    }

    #[tokio::test]
    async fn embeds_links_in_insertion_order() {
        let reader = InMemoryAffiliateProfileReader::new()
            .with_profile(json!({"username": "mika"}))
            .with_link(
                "mika",
                json!({"id": 1, "platform_name": "x", "url": "https://x.com/mika", "position": 2}),
            )
            .with_link(
                "mika",
                json!({"id": 2, "platform_name": "yt", "url": "https://youtube.com/@mika", "position": 1}),
            );

        let profile = reader.get_profile_with_socials(&name("mika")).await.unwrap();
        let positions: Vec<i32> = profile
            .affiliate_social_links
            .iter()
            .map(|l| l.position)
            .collect();
        assert_eq!(positions, vec![2, 1]);
    }

    #[tokio::test]
    async fn paginates_and_clamps() {
        let reader = reader_with(25);

        let second = reader
            .get_profiles_paginated(PageRequest::new(2, 10))
            .await
            .unwrap();
        assert_eq!(second.len(), 10);
        assert_eq!(second[0].username.as_str(), "user10");

        let last = reader
            .get_profiles_paginated(PageRequest::new(3, 10))
            .await
            .unwrap();
        assert_eq!(last.len(), 5);

        let beyond = reader
            .get_profiles_paginated(PageRequest::new(9, 10))
            .await
            .unwrap();
        assert!(beyond.is_empty());

        let zero = reader
            .get_profiles_paginated(PageRequest::new(0, 10))
            .await
            .unwrap();
        assert!(zero.is_empty());

        let huge = reader
            .get_profiles_paginated(PageRequest::new(1, i64::MAX))
            .await
            .unwrap();
        assert_eq!(huge.len(), 25);

        let extreme = reader
            .get_profiles_paginated(PageRequest::new(i64::MIN, 10))
            .await
            .unwrap();
        assert!(extreme.is_empty());
    }
}
