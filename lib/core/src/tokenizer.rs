//! Query tokenizer
//!
//! Splits the live search box text into lowercase keywords. No stemming,
//! no stop words and no deduplication: a keyword typed twice is scored twice.

use crate::id::kind_of;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A lowercased, trimmed, non-empty query token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Normalize a single token. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tokenize a query string.
///
/// An empty result means "no filter": callers show the whole list.
pub fn tokenize(query: &str) -> Vec<Keyword> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .to_lowercase()
        .split_whitespace()
        .filter(|s| !s.is_empty())
        .map(|s| Keyword(s.to_string()))
        .collect()
}

/// Tokenize an untyped query, rejecting anything that is not a string.
pub fn tokenize_value(query: &Value) -> Result<Vec<Keyword>> {
    match query {
        Value::String(s) => Ok(tokenize(s)),
        other => Err(Error::invalid(format!(
            "search query must be a string, got {}",
            kind_of(other)
        ))),
    }
}
