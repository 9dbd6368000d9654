//! Cache Module
//!
//! Definition cache keyed by normalized word, with TTL expiration.
//!
//! Two adapters implement [`VocabCache`]:
//! - [`RedisVocabCache`] - shared Redis store, used in production
//! - [`MemoryVocabCache`] - in-process store swept by a background task

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Result, VocabError};

mod entry;
mod memory;
mod redis_cache;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::MemoryVocabCache;
pub use redis_cache::RedisVocabCache;
pub use store::CacheStore;

// == Public Constants ==
/// Shortest TTL a cache write accepts.
pub const MIN_TTL: Duration = Duration::from_secs(1);

// == Vocab Cache Trait ==
/// Get/set-with-expiration operations on the definition cache.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait VocabCache: Send + Sync {
    /// Returns the cached definition, or `None` when absent or expired.
    ///
    /// Store failures surface as [`VocabError::CacheUnavailable`].
    async fn get(&self, word: &str) -> Result<Option<String>>;

    /// Stores `definition` under `word`, replacing any entry and resetting
    /// its expiry.
    ///
    /// TTLs below [`MIN_TTL`] are rejected with [`VocabError::CacheWrite`];
    /// entries never live forever.
    async fn set(&self, word: &str, definition: &str, ttl: Duration) -> Result<()>;
}

/// Rejects TTLs the adapters cannot honor.
pub(crate) fn check_ttl(ttl: Duration) -> Result<()> {
    if ttl < MIN_TTL {
        return Err(VocabError::CacheWrite(format!(
            "TTL must be at least {} second, got {}ms",
            MIN_TTL.as_secs(),
            ttl.as_millis()
        )));
    }
    Ok(())
}
