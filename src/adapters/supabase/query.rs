//! PostgREST query builder.
//!
//! Mirrors the fluent filter API of the Supabase client libraries for the
//! handful of primitives the profile reader needs: `select`, `eq`, `range`
//! and `single`. Each builder produces one GET request.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::client::SupabaseClient;
use crate::ports::{PostgrestError, QueryError, QueryResult};

/// Media type asking PostgREST for exactly one row as a JSON object.
pub const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// A read query against one table.
#[derive(Debug, Clone)]
pub struct PostgrestQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    range: Option<(i64, i64)>,
    single: bool,
}

impl<'a> PostgrestQuery<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            range: None,
            single: false,
        }
    }

    /// Columns to return, PostgREST `select` syntax (embedded relations allowed).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Keeps rows whose `column` equals `value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.into(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Limits the result to rows `start..=end`. Bounds are sent as given.
    pub fn range(mut self, start: i64, end: i64) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Requires exactly one matching row and returns it as an object.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];
        pairs.extend(self.filters.iter().cloned());
        if let Some((start, end)) = self.range {
            pairs.push(("offset".to_string(), start.to_string()));
            let limit = end.saturating_sub(start).saturating_add(1);
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    fn headers(&self) -> HeaderMap {
        let key = self.client.config().anon_key();
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", key)) {
            headers.insert(AUTHORIZATION, value);
        }
        let accept = if self.single {
            SINGLE_OBJECT_MEDIA_TYPE
        } else {
            "application/json"
        };
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
        headers
    }

    /// Builds the HTTP request without sending it.
    pub fn to_request(&self) -> RequestBuilder {
        self.client
            .http()
            .get(self.client.table_url(&self.table))
            .headers(self.headers())
            .query(&self.query_pairs())
    }

    /// Sends the query and decodes the response body as `T`.
    pub async fn execute<T: DeserializeOwned>(self) -> QueryResult<T> {
        tracing::debug!(
            table = %self.table,
            select = %self.columns,
            single = self.single,
            "Issuing PostgREST query"
        );

        let response = self.to_request().send().await.map_err(|e| {
            if e.is_timeout() {
                QueryError::Transport(format!("Request timed out: {}", e))
            } else if e.is_connect() {
                QueryError::Transport(format!("Connection failed: {}", e))
            } else {
                QueryError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(format!("Failed to read response: {}", e)))?;

        decode_response(status, &body)
    }
}

/// Turns a PostgREST status and body into the query result.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> QueryResult<T> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()));
    }

    let error = serde_json::from_str::<PostgrestError>(body).unwrap_or_else(|_| PostgrestError {
        code: None,
        message: if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body.to_string()
        },
        details: None,
        hint: None,
    });

    tracing::debug!(status, code = ?error.code, "PostgREST query failed");
    Err(QueryError::Api { status, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::supabase::SupabaseClientConfig;
    use serde_json::Value;
    use std::collections::HashMap;

    fn client() -> SupabaseClient {
        SupabaseClient::new(SupabaseClientConfig::new("https://abcd.supabase.co", "anon-key"))
            .unwrap()
    }

    fn pairs(request: &reqwest::Request) -> HashMap<String, String> {
        request.url().query_pairs().into_owned().collect()
    }

    #[test]
    fn select_eq_single_builds_object_request() {
        let client = client();
        let request = client
            .from("affiliate_profiles")
            .select("username,about")
            .eq("username", "mika")
            .single()
            .to_request()
            .build()
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/rest/v1/affiliate_profiles");
        let query = pairs(&request);
        assert_eq!(query["select"], "username,about");
        assert_eq!(query["username"], "eq.mika");
        assert!(!query.contains_key("offset"));
        assert_eq!(
            request.headers()[ACCEPT],
            "application/vnd.pgrst.object+json"
        );
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer anon-key");
    }

    #[test]
    fn range_becomes_offset_and_limit() {
        let client = client();
        let request = client
            .from("affiliate_profiles")
            .range(10, 19)
            .to_request()
            .build()
            .unwrap();

        let query = pairs(&request);
        assert_eq!(query["select"], "*");
        assert_eq!(query["offset"], "10");
        assert_eq!(query["limit"], "10");
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn negative_range_is_sent_uninterpreted() {
        let client = client();
        let request = client
            .from("affiliate_profiles")
            .range(-10, -1)
            .to_request()
            .build()
            .unwrap();

        let query = pairs(&request);
        assert_eq!(query["offset"], "-10");
        assert_eq!(query["limit"], "10");
    }

    #[test]
    fn extreme_range_does_not_overflow() {
        let client = client();
        let request = client
            .from("affiliate_profiles")
            .range(i64::MIN, i64::MAX)
            .to_request()
            .build()
            .unwrap();

        let query = pairs(&request);
        assert_eq!(query["offset"], i64::MIN.to_string());
        assert_eq!(query["limit"], i64::MAX.to_string());
    }

    #[test]
    fn decodes_success_body() {
        let rows: Vec<Value> = decode_response(200, r#"[{"username":"mika"}]"#).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn surfaces_postgrest_error_unchanged() {
        let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
        let err = decode_response::<Value>(406, body).unwrap_err();

        assert!(err.is_single_row_violation());
        match err {
            QueryError::Api { status, error } => {
                assert_eq!(status, 406);
                assert_eq!(error.details.as_deref(), Some("The result contains 0 rows"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_json_error_body_becomes_message() {
        let err = decode_response::<Value>(502, "Bad Gateway").unwrap_err();
        match err {
            QueryError::Api { status, error } => {
                assert_eq!(status, 502);
                assert_eq!(error.message, "Bad Gateway");
                assert_eq!(error.code, None);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_response::<Vec<Value>>(200, "{not json").unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
    }
}
