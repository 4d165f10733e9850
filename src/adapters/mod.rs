//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `supabase` - PostgREST queries against the affiliate tables
//! - `memory` - In-memory profile reader for tests
//! - `filesystem` - Local directory trees
//! - `images` - WebP encoding
//! - `console` - Colored CI output

pub mod console;
pub mod filesystem;
pub mod images;
pub mod memory;
pub mod supabase;

pub use console::{ConsoleReporter, Tone};
pub use filesystem::LocalFileTree;
pub use images::WebpConverter;
pub use memory::InMemoryAffiliateProfileReader;
pub use supabase::{SupabaseAffiliateProfileReader, SupabaseClient, SupabaseClientConfig};
