//! Sentiment buckets and the aggregate sentiment outcome
//!
//! The mean star rating of a text maps onto a five-point scale. When no
//! sentence could be scored at all, the outcome is a separate sentinel
//! rather than a fifth-ish bucket, so callers can tell "neutral" apart
//! from "nothing to score".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five-point sentiment scale derived from the mean star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBucket {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentBucket {
    /// Map a mean rating onto a bucket
    ///
    /// Thresholds are half-open and inclusive at the top: a mean of
    /// exactly 1.5 is `VeryNegative`, exactly 3.5 is `Neutral`.
    pub fn from_mean(mean: f64) -> Self {
        if mean <= 1.5 {
            Self::VeryNegative
        } else if mean <= 2.5 {
            Self::Negative
        } else if mean <= 3.5 {
            Self::Neutral
        } else if mean <= 4.5 {
            Self::Positive
        } else {
            Self::VeryPositive
        }
    }

    /// Human-readable bucket name
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryNegative => "Very Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::VeryPositive => "Very Positive",
        }
    }

    /// Emoji glyph shown alongside the label
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::VeryNegative => "😢",
            Self::Negative => "🙁",
            Self::Neutral => "😐",
            Self::Positive => "🙂",
            Self::VeryPositive => "😃",
        }
    }

    /// Position on the scale, 1 (most negative) to 5 (most positive)
    pub const fn rank(self) -> u8 {
        match self {
            Self::VeryNegative => 1,
            Self::Negative => 2,
            Self::Neutral => 3,
            Self::Positive => 4,
            Self::VeryPositive => 5,
        }
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Aggregate sentiment outcome for one analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// At least one sentence was scored; the bucket comes from the mean
    Detected(SentimentBucket),
    /// No sentence could be scored
    NotDetected,
}

impl Sentiment {
    /// Whether any sentence was scored
    pub const fn is_detected(self) -> bool {
        matches!(self, Self::Detected(_))
    }

    /// The bucket, when one was detected
    pub const fn bucket(self) -> Option<SentimentBucket> {
        match self {
            Self::Detected(bucket) => Some(bucket),
            Self::NotDetected => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected(bucket) => bucket.fmt(f),
            Self::NotDetected => write!(f, "Not Detected"),
        }
    }
}
