//! Cache Store Module
//!
//! HashMap-backed TTL store behind the in-memory cache adapter.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Word-to-definition map with per-entry expiry.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a definition, overwriting any existing entry and resetting its TTL.
    pub fn set(&mut self, key: String, value: String, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Returns the definition if present and not expired.
    ///
    /// Expired entries are removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    /// Returns the number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("apple".to_string(), "a fruit".to_string(), TTL);

        assert_eq!(store.get("apple").as_deref(), Some("a fruit"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite_resets_value() {
        let mut store = CacheStore::new();

        store.set("apple".to_string(), "a fruit".to_string(), TTL);
        store.set("apple".to_string(), "a company".to_string(), TTL);

        assert_eq!(store.get("apple").as_deref(), Some("a company"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_ttl() {
        let mut store = CacheStore::new();

        store.set("apple".to_string(), "a fruit".to_string(), Duration::from_secs(1));
        sleep(Duration::from_millis(600));
        store.set("apple".to_string(), "a fruit".to_string(), Duration::from_secs(1));
        sleep(Duration::from_millis(600));

        // First TTL has elapsed, second has not
        assert!(store.get("apple").is_some());
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set("apple".to_string(), "a fruit".to_string(), Duration::from_secs(1));
        assert!(store.get("apple").is_some());

        sleep(Duration::from_millis(1100));

        assert!(store.get("apple").is_none());
        // Expired entry was dropped by the read
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.set("apple".to_string(), "a fruit".to_string(), Duration::from_secs(1));
        store.set("pear".to_string(), "another fruit".to_string(), Duration::from_secs(10));

        sleep(Duration::from_millis(1100));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("pear").is_some());
    }
}
