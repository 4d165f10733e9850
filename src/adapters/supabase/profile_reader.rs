//! Supabase adapter for AffiliateProfileReader

use async_trait::async_trait;

use super::client::SupabaseClient;
use super::query::PostgrestQuery;
use crate::domain::affiliate::{
    AffiliateProfile, PageRequest, ProfileColumns, ProfileWithSocials, PROFILES_TABLE,
    PROFILE_COLUMNS, SOCIAL_LINKS_TABLE, SOCIAL_LINK_COLUMNS,
};
use crate::domain::foundation::Username;
use crate::ports::{AffiliateProfileReader, QueryResult};

/// Supabase implementation of AffiliateProfileReader
pub struct SupabaseAffiliateProfileReader {
    client: SupabaseClient,
}

impl SupabaseAffiliateProfileReader {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn all_profiles_query(&self) -> PostgrestQuery<'_> {
        self.client.from(PROFILES_TABLE).select("*")
    }

    fn profile_columns_query(&self, username: &Username) -> PostgrestQuery<'_> {
        self.client
            .from(PROFILES_TABLE)
            .select(PROFILE_COLUMNS.join(","))
            .eq("username", username.as_str())
            .single()
    }

    fn profile_with_socials_query(&self, username: &Username) -> PostgrestQuery<'_> {
        self.client
            .from(PROFILES_TABLE)
            .select(format!(
                "*,{}({})",
                SOCIAL_LINKS_TABLE,
                SOCIAL_LINK_COLUMNS.join(",")
            ))
            .eq("username", username.as_str())
            .single()
    }

    fn paginated_query(&self, page: PageRequest) -> PostgrestQuery<'_> {
        let (start, end) = page.range();
        self.client.from(PROFILES_TABLE).select("*").range(start, end)
    }
}

#[async_trait]
impl AffiliateProfileReader for SupabaseAffiliateProfileReader {
    async fn get_all_profiles(&self) -> QueryResult<Vec<AffiliateProfile>> {
        self.all_profiles_query().execute().await
    }

    async fn get_profile_columns(&self, username: &Username) -> QueryResult<ProfileColumns> {
        self.profile_columns_query(username).execute().await
    }

    async fn get_profile_with_socials(
        &self,
        username: &Username,
    ) -> QueryResult<ProfileWithSocials> {
        self.profile_with_socials_query(username).execute().await
    }

    async fn get_profiles_paginated(
        &self,
        page: PageRequest,
    ) -> QueryResult<Vec<AffiliateProfile>> {
        self.paginated_query(page).execute().await
    }
}
