//! Error types for the vocabulary service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Vocab Error Enum ==
/// Unified error type for the lookup path.
#[derive(Error, Debug)]
pub enum VocabError {
    /// Missing or blank word
    #[error("{0}")]
    InvalidInput(String),

    /// Cache store could not be reached or answered with a protocol error
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Network failure while calling an upstream API
    #[error("Failed to send request to {service}: {message}")]
    UpstreamTransport { service: String, message: String },

    /// Upstream API answered with a non-success status
    #[error("{service} responded with status {status}: {body}")]
    UpstreamStatus {
        service: String,
        status: u16,
        body: String,
    },

    /// Upstream body was not the expected JSON
    #[error("Failed to parse response from {service}: {message}")]
    Parse { service: String, message: String },

    /// Word generator returned no candidates
    #[error("{0} returned no words")]
    EmptyResult(String),

    /// Writing a freshly fetched definition to the cache failed
    #[error("Failed to cache definition: {0}")]
    CacheWrite(String),
}

impl VocabError {
    /// Status code reported to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            VocabError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for VocabError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// == Config Error Enum ==
/// Errors raised while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// == Result Type Alias ==
/// Convenience Result type for the lookup path.
pub type Result<T> = std::result::Result<T, VocabError>;
