//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates lowercase words like the lookup path produces
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,24}"
}

/// Generates definitions, empty included
fn definition_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.;]{0,256}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { word: String, definition: String },
    Get { word: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (word_strategy(), definition_strategy())
            .prop_map(|(word, definition)| CacheOp::Set { word, definition }),
        word_strategy().prop_map(|word| CacheOp::Get { word }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Before any TTL elapses the store behaves like a map where the last
    // write wins.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { word, definition } => {
                    store.set(word.clone(), definition.clone(), TEST_TTL);
                    model.insert(word, definition);
                }
                CacheOp::Get { word } => {
                    prop_assert_eq!(store.get(&word), model.get(&word).cloned());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    #[test]
    fn prop_overwrite_semantics(
        word in word_strategy(),
        first in definition_strategy(),
        second in definition_strategy()
    ) {
        let mut store = CacheStore::new();

        store.set(word.clone(), first, TEST_TTL);
        store.set(word.clone(), second.clone(), TEST_TTL);

        prop_assert_eq!(store.get(&word), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Nothing is swept while every TTL is still running.
    #[test]
    fn prop_cleanup_keeps_live_entries(
        entries in prop::collection::vec((word_strategy(), definition_strategy()), 1..50)
    ) {
        let mut store = CacheStore::new();
        for (word, definition) in entries {
            store.set(word, definition, TEST_TTL);
        }

        let before = store.len();
        prop_assert_eq!(store.cleanup_expired(), 0);
        prop_assert_eq!(store.len(), before);
    }
}

// Fewer cases for the time-sensitive TTL check
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    #[test]
    fn prop_ttl_expiration_behavior(
        word in word_strategy(),
        definition in definition_strategy()
    ) {
        let mut store = CacheStore::new();

        store.set(word.clone(), definition.clone(), Duration::from_secs(1));
        prop_assert_eq!(store.get(&word), Some(definition));

        // Small buffer past the TTL
        sleep(Duration::from_millis(1100));

        prop_assert_eq!(store.get(&word), None);
    }
}
