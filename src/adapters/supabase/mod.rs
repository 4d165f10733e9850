//! Supabase adapters for the affiliate profile tables

mod client;
mod profile_reader;
mod query;

pub use client::{SupabaseClient, SupabaseClientConfig};
pub use profile_reader::SupabaseAffiliateProfileReader;
pub use query::{decode_response, PostgrestQuery, SINGLE_OBJECT_MEDIA_TYPE};
