//! Word Generator Client
//!
//! Asks the random word API for a word.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::{Result, VocabError};
use crate::models::RandomWordResponse;
use crate::upstream::http::{send_json, API_KEY_HEADER};

const SERVICE: &str = "word generator API";

/// Source of random words.
#[async_trait]
pub trait WordGenerator: Send + Sync {
    /// Returns one word, or [`VocabError::EmptyResult`] when the upstream
    /// offers no candidates.
    async fn fetch_random_word(&self) -> Result<String>;
}

/// [`WordGenerator`] backed by the API Ninjas random word endpoint.
#[derive(Debug, Clone)]
pub struct NinjaWordClient {
    http_client: Client,
    url: String,
    api_key: String,
}

impl NinjaWordClient {
    pub fn new(http_client: Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WordGenerator for NinjaWordClient {
    async fn fetch_random_word(&self) -> Result<String> {
        let request = self
            .http_client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json");

        let body: RandomWordResponse = send_json(request, SERVICE).await?;

        body.first_word()
            .map(str::to_string)
            .ok_or_else(|| VocabError::EmptyResult(SERVICE.to_string()))
    }
}
