//! Vocab Cache - word definitions behind a cache-aside lookup
//!
//! Serves definitions and random words from an external dictionary API,
//! caching each fetched definition with a TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use lookup::LookupService;
pub use tasks::spawn_cleanup_task;
