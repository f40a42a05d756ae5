//! Expiry Sweep Task
//!
//! Background task that periodically reclaims expired cache entries. Reads
//! already treat expired entries as absent; the sweep only bounds memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `interval_secs` between runs and locks one shard at
/// a time, so it never blocks the whole store.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(store: Arc<CacheStore>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.purge_expired();
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::current_timestamp;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let store = Arc::new(CacheStore::new());
        store
            .set("expired", b"value".to_vec(), current_timestamp() - 10)
            .unwrap();
        assert_eq!(store.len(), 1);

        let handle = spawn_sweep_task(store.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(store.is_empty(), "Expired entry should have been reclaimed");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_live_entries() {
        let store = Arc::new(CacheStore::new());
        store
            .set("long_lived", b"value".to_vec(), current_timestamp() + 3600)
            .unwrap();
        store.set("forever", b"value".to_vec(), 0).unwrap();

        let handle = spawn_sweep_task(store.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("long_lived").unwrap(), b"value");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let store = Arc::new(CacheStore::new());

        let handle = spawn_sweep_task(store, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
