//! Request DTOs
//!
//! Query parameters accepted by the lookup endpoints.

use crate::error::{Result, VocabError};

/// Query string for `GET /api/v1/dictionary`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryParams {
    /// Word to define
    pub word: Option<String>,
}

impl DictionaryParams {
    /// Builds params from decoded query pairs.
    ///
    /// Repeated keys are allowed; the first `word` wins and unknown keys
    /// are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let word = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "word").then_some(value));
        Self { word }
    }

    /// Returns the requested word, rejecting a missing or blank one.
    pub fn word(&self) -> Result<&str> {
        match self.word.as_deref().map(str::trim) {
            Some(word) if !word.is_empty() => Ok(word),
            _ => Err(VocabError::InvalidInput("No word provided".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_with_word() {
        let params = DictionaryParams {
            word: Some(" Apple ".to_string()),
        };
        assert_eq!(params.word().unwrap(), "Apple");
    }

    #[test]
    fn test_params_first_word_wins() {
        let params = DictionaryParams::from_pairs(vec![
            ("lang".to_string(), "en".to_string()),
            ("word".to_string(), "apple".to_string()),
            ("word".to_string(), "pear".to_string()),
        ]);
        assert_eq!(params.word().unwrap(), "apple");
    }

    #[test]
    fn test_params_from_pairs_without_word() {
        let params = DictionaryParams::from_pairs(vec![("w".to_string(), "apple".to_string())]);
        assert!(matches!(params.word(), Err(VocabError::InvalidInput(_))));
    }

    #[test]
    fn test_params_missing_word() {
        let params = DictionaryParams::default();
        assert!(matches!(params.word(), Err(VocabError::InvalidInput(_))));
    }

    #[test]
    fn test_params_blank_word() {
        let params = DictionaryParams {
            word: Some("   ".to_string()),
        };
        assert!(matches!(params.word(), Err(VocabError::InvalidInput(_))));
    }
}
