//! Lookup Module
//!
//! Cache-aside read path shared by both endpoints: try the cache, fetch on a
//! miss, store the fetched definition with the configured TTL.

mod result;
mod service;

pub use result::{LookupResult, Origin, RandomWordResult};
pub use service::{normalize_word, LookupService};
