//! Lookup Service
//!
//! Orchestrates cache, dictionary and word generator for each request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::VocabCache;
use crate::error::{Result, VocabError};
use crate::lookup::{LookupResult, RandomWordResult};
use crate::metrics::ApiMetrics;
use crate::upstream::{DefinitionFetcher, WordGenerator};

/// Cache key for `word`: trimmed and lowercased, `None` when blank.
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

/// Cache-aside lookups over injected dependencies.
///
/// Holds no per-request state, so one instance serves all requests.
/// Concurrent misses for the same word are not coalesced: each one fetches
/// and writes, and the last write wins.
#[derive(Clone)]
pub struct LookupService {
    cache: Arc<dyn VocabCache>,
    fetcher: Arc<dyn DefinitionFetcher>,
    generator: Arc<dyn WordGenerator>,
    ttl: Duration,
    metrics: ApiMetrics,
}

impl LookupService {
    pub fn new(
        cache: Arc<dyn VocabCache>,
        fetcher: Arc<dyn DefinitionFetcher>,
        generator: Arc<dyn WordGenerator>,
        ttl: Duration,
        metrics: ApiMetrics,
    ) -> Self {
        Self {
            cache,
            fetcher,
            generator,
            ttl,
            metrics,
        }
    }

    // == Dictionary Lookup ==
    /// Returns the definition of `word`, from the cache when possible.
    ///
    /// A blank word fails with [`VocabError::InvalidInput`] before any I/O.
    /// Cache read failures degrade to a miss; a failed cache write after a
    /// successful fetch is logged and counted but does not fail the lookup.
    pub async fn dictionary_lookup(&self, word: &str) -> Result<LookupResult> {
        let word = normalize_word(word)
            .ok_or_else(|| VocabError::InvalidInput("No word provided".to_string()))?;

        match self.cache.get(&word).await {
            Ok(Some(definition)) => return Ok(LookupResult::cache_hit(definition)),
            Ok(None) => {}
            Err(e) => warn!("Cache read for '{}' failed, falling back to fetch: {}", word, e),
        }

        let definition = self.fetcher.fetch_definition(&word).await?;
        debug!("Fetched definition for '{}'", word);

        if let Err(e) = self.cache.set(&word, &definition, self.ttl).await {
            self.metrics.record_cache_write_error();
            warn!("Serving uncached definition for '{}': {}", word, e);
        }

        Ok(LookupResult::fresh_fetch(definition))
    }

    // == Random Word Lookup ==
    /// Generates a word and looks it up the same way as
    /// [`dictionary_lookup`](Self::dictionary_lookup).
    ///
    /// Generator failures return before the cache is touched.
    pub async fn random_word_lookup(&self) -> Result<RandomWordResult> {
        let word = self.generator.fetch_random_word().await?;
        let result = self.dictionary_lookup(&word).await?;

        Ok(RandomWordResult { word, result })
    }
}
