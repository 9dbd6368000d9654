//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::Result;
use crate::lookup::LookupService;
use crate::metrics::ApiMetrics;
use crate::models::{DictionaryParams, HealthResponse};

/// Metric label for the dictionary endpoint.
pub const DICTIONARY_ENDPOINT: &str = "/dictionary";

/// Metric label for the random word endpoint.
pub const RANDOM_WORD_ENDPOINT: &str = "/randomword";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
    pub metrics: ApiMetrics,
}

impl AppState {
    pub fn new(lookup: LookupService, metrics: ApiMetrics) -> Self {
        Self {
            lookup: Arc::new(lookup),
            metrics,
        }
    }
}

/// Handler for GET /api/v1/dictionary?word=<word>
///
/// Answers `REDIS: <definition>` on a cache hit and `NINJA: <definition>`
/// after a fresh fetch.
///
/// The query is taken as raw pairs so that repeated or unexpected keys
/// still reach the handler and get counted.
pub async fn dictionary_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String> {
    let started = Instant::now();
    let params = DictionaryParams::from_pairs(pairs);

    let outcome = match params.word() {
        Ok(word) => state.lookup.dictionary_lookup(word).await,
        Err(e) => Err(e),
    };

    state.metrics.record_request(DICTIONARY_ENDPOINT, started.elapsed());
    match outcome {
        Ok(result) => {
            if result.origin.is_cache_hit() {
                state.metrics.record_cache_hit(DICTIONARY_ENDPOINT);
            }
            Ok(result.to_string())
        }
        Err(e) => {
            state.metrics.record_error(DICTIONARY_ENDPOINT);
            Err(e)
        }
    }
}

/// Handler for GET /api/v1/randomword
///
/// Answers `<word> is the word <ORIGIN>: <definition>`.
pub async fn random_word_handler(State(state): State<AppState>) -> Result<String> {
    let started = Instant::now();

    let outcome = state.lookup.random_word_lookup().await;

    state.metrics.record_request(RANDOM_WORD_ENDPOINT, started.elapsed());
    match outcome {
        Ok(random) => {
            if random.result.origin.is_cache_hit() {
                state.metrics.record_cache_hit(RANDOM_WORD_ENDPOINT);
            }
            Ok(random.to_string())
        }
        Err(e) => {
            state.metrics.record_error(RANDOM_WORD_ENDPOINT);
            Err(e)
        }
    }
}

/// Handler for GET /metrics
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
