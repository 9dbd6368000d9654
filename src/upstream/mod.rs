//! Upstream API clients
//!
//! Capability traits for the two external services plus their reqwest-based
//! adapters. Both adapters share one [`reqwest::Client`] built by
//! [`build_http_client`].

mod definition;
mod http;
mod word_generator;

pub use definition::{DefinitionFetcher, NinjaDefinitionClient};
pub use http::{build_http_client, API_KEY_HEADER};
pub use word_generator::{NinjaWordClient, WordGenerator};
