//! Cache Module
//!
//! Provides the in-memory key-value store with lazy TTL expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry};
pub use store::CacheStore;

// == Public Constants ==
/// Default number of lock shards in a store
pub const DEFAULT_SHARDS: usize = 16;

/// Expiry sentinel meaning "never expires"
pub const NO_EXPIRY: i64 = 0;
