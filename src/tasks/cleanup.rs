//! TTL Cleanup Task
//!
//! Background sweep for the in-memory cache backend.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryVocabCache;

/// Spawns a task that drops expired entries from `cache` every `interval`.
///
/// Reads already ignore expired entries; the sweep only reclaims memory for
/// words that are never looked up again. Abort the returned handle on
/// shutdown.
pub fn spawn_cleanup_task(cache: MemoryVocabCache, interval: Duration) -> JoinHandle<()> {
    let store = cache.store();

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {}s",
            interval.as_secs()
        );

        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = store.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::VocabCache;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = MemoryVocabCache::new();
        cache
            .set("ephemeral", "short lived", Duration::from_secs(1))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));

        // Entry expires at 1s, sweep runs at 1s and 2s
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Gone without a read having removed it
        assert!(cache.is_empty().await);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = MemoryVocabCache::new();
        cache
            .set("enduring", "long lived", Duration::from_secs(3600))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.get("enduring").await.unwrap().as_deref(),
            Some("long lived")
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryVocabCache::new(), Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
