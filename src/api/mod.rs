//! API Module
//!
//! HTTP handlers and routing.
//!
//! # Endpoints
//! - `GET /api/v1/dictionary?word=<word>` - Define a word
//! - `GET /api/v1/randomword` - Define a random word
//! - `GET /metrics` - Prometheus metrics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
