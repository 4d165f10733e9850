//! AffiliateProfileReader port for read-only profile queries
//!
//! Every operation returns a [`QueryResult`]: either the data, or the backing
//! store's failure passed through unchanged. Callers branch on the result;
//! nothing on this boundary panics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::affiliate::{AffiliateProfile, PageRequest, ProfileColumns, ProfileWithSocials};
use crate::domain::foundation::Username;

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
pub const SINGLE_ROW_VIOLATION: &str = "PGRST116";

/// Error body returned by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Failure of a profile query, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Query rejected ({}): {}", .status, .error.message)]
    Api { status: u16, error: PostgrestError },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl QueryError {
    /// Whether the store refused a single-row query because zero or several rows matched.
    pub fn is_single_row_violation(&self) -> bool {
        matches!(
            self,
            QueryError::Api { error, .. } if error.code.as_deref() == Some(SINGLE_ROW_VIOLATION)
        )
    }
}

/// Data or the store's error.
pub type QueryResult<T> = Result<T, QueryError>;

/// Read operations over the affiliate profile tables.
///
/// Calls are independent and stateless; implementations add no caching,
/// retries or ordering guarantees across calls.
#[async_trait]
pub trait AffiliateProfileReader: Send + Sync {
    /// Every profile row, in the store's default order.
    async fn get_all_profiles(&self) -> QueryResult<Vec<AffiliateProfile>>;

    /// The four display columns of exactly one profile.
    async fn get_profile_columns(&self, username: &Username) -> QueryResult<ProfileColumns>;

    /// Exactly one profile with its social links embedded, links unsorted.
    async fn get_profile_with_socials(
        &self,
        username: &Username,
    ) -> QueryResult<ProfileWithSocials>;

    /// One page of profile rows.
    async fn get_profiles_paginated(
        &self,
        page: PageRequest,
    ) -> QueryResult<Vec<AffiliateProfile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(code: Option<&str>) -> QueryError {
        QueryError::Api {
            status: 406,
            error: PostgrestError {
                code: code.map(String::from),
                message: "JSON object requested, multiple (or no) rows returned".to_string(),
                details: Some("The result contains 0 rows".to_string()),
                hint: None,
            },
        }
    }

    #[test]
    fn recognizes_single_row_violation() {
        assert!(api_error(Some("PGRST116")).is_single_row_violation());
        assert!(!api_error(Some("42P01")).is_single_row_violation());
        assert!(!api_error(None).is_single_row_violation());
        assert!(!QueryError::Transport("refused".into()).is_single_row_violation());
    }

    #[test]
    fn api_error_displays_status_and_message() {
        assert_eq!(
            api_error(None).to_string(),
            "Query rejected (406): JSON object requested, multiple (or no) rows returned"
        );
    }

    #[test]
    fn postgrest_error_decodes_minimal_body() {
        let err: PostgrestError =
            serde_json::from_str(r#"{"message":"relation does not exist"}"#).unwrap();
        assert_eq!(err.code, None);
        assert_eq!(err.message, "relation does not exist");
    }
}
