//! Request, response and upstream payload models
//!
//! DTOs for the HTTP surface and for the JSON envelopes returned by the
//! dictionary and word generator APIs.

pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use requests::DictionaryParams;
pub use responses::HealthResponse;
pub use upstream::{DefinitionResponse, RandomWordResponse};
