//! In-memory adapters for tests and local development

mod profile_reader;

pub use profile_reader::InMemoryAffiliateProfileReader;
