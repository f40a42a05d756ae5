//! Cache Store Module
//!
//! Main cache engine: key-hash sharded maps with lazy TTL expiration.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

use parking_lot::Mutex;

use crate::cache::entry::current_timestamp;
use crate::cache::{CacheEntry, DEFAULT_SHARDS};
use crate::error::{CacheError, Result};

type Shard = HashMap<String, CacheEntry>;

// == Cache Store ==
/// Concurrency-safe key-value storage with absolute-expiry entries.
///
/// Keys are spread over a fixed number of shards, each behind its own lock.
/// Every operation touches exactly one shard, so single-key operations are
/// atomic and serialized per shard. A store with one shard behaves as a
/// single coarse-locked map.
///
/// Expiry is lazy: `get` treats an expired entry as absent but leaves it in
/// place. Dead entries are only reclaimed by overwrite, `delete`, or
/// `purge_expired`.
#[derive(Debug)]
pub struct CacheStore {
    shards: Vec<Mutex<Shard>>,
    hasher: RandomState,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the default shard count.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Creates a new CacheStore with `shards` independent locks (minimum 1).
    pub fn with_shards(shards: usize) -> Self {
        let shards = (0..shards.max(1)).map(|_| Mutex::new(Shard::new())).collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    fn shard(&self, key: &str) -> &Mutex<Shard> {
        let index = self.hasher.hash_one(key) as usize % self.shards.len();
        &self.shards[index]
    }

    // == Set ==
    /// Stores a key-value pair, fully replacing any previous entry.
    ///
    /// Validation runs before the lock is taken, so a rejected write never
    /// touches the existing entry.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The bytes to store, must be non-empty
    /// * `expires_at` - Absolute expiry in Unix seconds, 0 = never
    pub fn set(&self, key: impl Into<String>, value: Vec<u8>, expires_at: i64) -> Result<()> {
        if value.is_empty() {
            return Err(CacheError::EmptyValue);
        }
        if expires_at < 0 {
            return Err(CacheError::NegativeTtl(expires_at));
        }

        let key = key.into();
        self.shard(&key)
            .lock()
            .insert(key, CacheEntry::new(value, expires_at));
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `NotFound` both for absent keys and for entries whose expiry
    /// has passed; the two cases are indistinguishable to the caller.
    pub fn get(&self, key: &str) -> Result<Vec<u8>> {
        let now = current_timestamp();
        let shard = self.shard(key).lock();
        match shard.get(key) {
            Some(entry) if !entry.is_expired_at(now) => Ok(entry.value.clone()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it was present.
    ///
    /// Expired-but-unreclaimed entries count as present here, since the
    /// removal does reclaim them.
    pub fn delete(&self, key: &str) -> bool {
        self.shard(key).lock().remove(key).is_some()
    }

    // == Purge Expired ==
    /// Removes all entries expired at the current time.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(current_timestamp())
    }

    /// Removes all entries expired at `now`, one shard at a time.
    pub fn purge_expired_at(&self, now: i64) -> usize {
        self.shards
            .iter()
            .map(|shard| {
                let mut shard = shard.lock();
                let before = shard.len();
                shard.retain(|_, entry| !entry.is_expired_at(now));
                before - shard.len()
            })
            .sum()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Returns the number of lock shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
