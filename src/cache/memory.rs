//! In-memory cache adapter
//!
//! Wraps a [`CacheStore`] in `Arc<RwLock<>>` so handlers and the cleanup
//! task can share it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{check_ttl, CacheStore, VocabCache};
use crate::error::Result;

/// Process-local [`VocabCache`].
///
/// Entries are not shared between instances; pair with
/// [`spawn_cleanup_task`](crate::tasks::spawn_cleanup_task) so expired
/// entries that are never read again still get dropped.
#[derive(Clone, Default)]
pub struct MemoryVocabCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryVocabCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.store)
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl VocabCache for MemoryVocabCache {
    async fn get(&self, word: &str) -> Result<Option<String>> {
        // Write lock: expired entries are removed on read
        let value = self.store.write().await.get(word);

        match &value {
            Some(_) => debug!("Cache hit for word '{}'", word),
            None => debug!("Cache miss for word '{}'", word),
        }

        Ok(value)
    }

    async fn set(&self, word: &str, definition: &str, ttl: Duration) -> Result<()> {
        check_ttl(ttl)?;

        self.store
            .write()
            .await
            .set(word.to_string(), definition.to_string(), ttl);

        debug!("Cached word '{}' with TTL {}s", word, ttl.as_secs());
        Ok(())
    }
}
