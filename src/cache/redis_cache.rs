//! Redis cache adapter

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::debug;

use crate::cache::{check_ttl, VocabCache};
use crate::error::{Result, VocabError};

/// Redis-backed [`VocabCache`].
///
/// Holds a single [`ConnectionManager`], which multiplexes commands over one
/// connection and reconnects on failure. Cloning it per call is cheap.
#[derive(Clone)]
pub struct RedisVocabCache {
    conn: ConnectionManager,
}

impl RedisVocabCache {
    /// Connects to the Redis server at `url` (e.g. `redis://localhost:6379`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(|e| {
            VocabError::CacheUnavailable(format!("Invalid Redis URL '{}': {}", url, e))
        })?;

        let conn = ConnectionManager::new(client).await.map_err(|e| {
            VocabError::CacheUnavailable(format!("Failed to connect to Redis: {}", e))
        })?;

        Ok(Self { conn })
    }

    /// Round-trips a `PING`.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| VocabError::CacheUnavailable(format!("PING failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl VocabCache for RedisVocabCache {
    async fn get(&self, word: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(word).await.map_err(|e| {
            VocabError::CacheUnavailable(format!("Failed to get key '{}': {}", word, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for word '{}'", word),
            None => debug!("Cache miss for word '{}'", word),
        }

        Ok(value)
    }

    async fn set(&self, word: &str, definition: &str, ttl: Duration) -> Result<()> {
        check_ttl(ttl)?;

        // SETEX writes value and expiry in one command
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(word, definition, ttl.as_secs())
            .await
            .map_err(|e| {
                VocabError::CacheWrite(format!("Failed to set key '{}': {}", word, e))
            })?;

        debug!("Cached word '{}' with TTL {}s", word, ttl.as_secs());
        Ok(())
    }
}
