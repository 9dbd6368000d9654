//! Definition Fetcher
//!
//! Looks up a word's definition from the dictionary API.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::DefinitionResponse;
use crate::upstream::http::{send_json, API_KEY_HEADER};

const SERVICE: &str = "dictionary API";

/// Source of truth for word definitions.
#[async_trait]
pub trait DefinitionFetcher: Send + Sync {
    async fn fetch_definition(&self, word: &str) -> Result<String>;
}

/// [`DefinitionFetcher`] backed by the API Ninjas dictionary endpoint.
///
/// Issues `GET <url>?word=<word>` with the API key header.
#[derive(Debug, Clone)]
pub struct NinjaDefinitionClient {
    http_client: Client,
    url: String,
    api_key: String,
}

impl NinjaDefinitionClient {
    pub fn new(http_client: Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DefinitionFetcher for NinjaDefinitionClient {
    async fn fetch_definition(&self, word: &str) -> Result<String> {
        let request = self
            .http_client
            .get(&self.url)
            .query(&[("word", word)])
            .header(API_KEY_HEADER, &self.api_key);

        let body: DefinitionResponse = send_json(request, SERVICE).await?;
        Ok(body.definition)
    }
}
