//! Normalized text value object
//!
//! The cleaned form of caller input: lowercase Latin letters (including
//! á é í ó ú ü ñ) separated by single spaces, with URLs, mentions,
//! hashtags, and stopwords removed. Produced by the text normalizer;
//! wrapping a string here does not re-run the cleaning.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text that has been through the cleaning pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedText {
    value: String,
}

impl NormalizedText {
    /// Wrap already-cleaned text
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the text as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True when cleaning removed everything (empty or all-stopword input)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Consume the wrapper and return the inner string
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
