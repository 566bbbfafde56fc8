//! Sentence value object
//!
//! A segment of normalized text handed to the classifier. Segmentation
//! guarantees sentences are never empty and keep their source order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-empty, trimmed segment of normalized text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence {
    value: String,
}

impl Sentence {
    /// Create a sentence, trimming surrounding whitespace
    ///
    /// Returns `None` if the trimmed text is empty, so segment filtering
    /// can drop blank pieces without a separate check.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let value = text.into().trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(Self { value })
        }
    }

    /// Get the sentence text
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Character count, used for log fields
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
