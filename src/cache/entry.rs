//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiry.

// == Cache Entry ==
/// Represents a single cache entry with value and expiry timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix seconds), 0 = no expiration
    pub expires_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The bytes to store
    /// * `expires_at` - Absolute expiry in Unix seconds, 0 for none
    pub fn new(value: Vec<u8>, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given instant.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// write whose expiry equals the current second is already dead on read.
    /// Entries with `expires_at == 0` never expire.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at != 0 && now >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
