//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{
    dictionary_handler, health_handler, metrics_handler, random_word_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/dictionary?word=<word>` - Define a word
/// - `GET /api/v1/randomword` - Define a random word
/// - `GET /metrics` - Prometheus metrics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Tracing: logs every request
/// - Catch panic: turns a handler panic into a 500
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/dictionary", get(dictionary_handler))
        .route("/randomword", get(random_word_handler));

    Router::new()
        .nest("/api/v1", v1)
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
