//! Upstream payloads
//!
//! JSON envelopes returned by the dictionary and word generator APIs.

use serde::Deserialize;

/// Body of a dictionary lookup.
///
/// Only `definition` is read; a missing field yields an empty definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionResponse {
    #[serde(default)]
    pub definition: String,
}

/// Body of a random word request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomWordResponse {
    /// Candidate words; only the first is used
    #[serde(default)]
    pub word: Vec<String>,
}

impl RandomWordResponse {
    /// First non-blank candidate at the head of the list, if any.
    pub fn first_word(&self) -> Option<&str> {
        self.word
            .first()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
    }
}
