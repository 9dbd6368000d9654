//! Lookup results and their wire rendering.

use std::fmt;

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Served from the cache
    CacheHit,
    /// Fetched from the dictionary API on this request
    FreshFetch,
}

impl Origin {
    pub fn is_cache_hit(self) -> bool {
        matches!(self, Origin::CacheHit)
    }

    /// Prefix used in response bodies.
    pub fn label(self) -> &'static str {
        match self {
            Origin::CacheHit => "REDIS",
            Origin::FreshFetch => "NINJA",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A definition tagged with its [`Origin`].
///
/// Displays as `"<ORIGIN>: <definition>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub definition: String,
    pub origin: Origin,
}

impl LookupResult {
    pub fn cache_hit(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            origin: Origin::CacheHit,
        }
    }

    pub fn fresh_fetch(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            origin: Origin::FreshFetch,
        }
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.definition)
    }
}

/// A generated word and its lookup.
///
/// Displays as `"<word> is the word <ORIGIN>: <definition>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWordResult {
    pub word: String,
    pub result: LookupResult,
}

impl fmt::Display for RandomWordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is the word {}", self.word, self.result)
    }
}
