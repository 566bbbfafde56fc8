//! Analysis outcome entities
//!
//! `AnalysisResult` carries the aggregate sentiment for one submitted
//! text. The aggregation itself lives here: averaging per-sentence star
//! ratings, bucketing the mean, and deriving the confidence value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{Sentiment, SentimentBucket, StarRating};

/// Aggregate outcome of analyzing one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The text as submitted by the caller
    pub text: String,
    /// Overall sentiment, or the sentinel when nothing scored
    pub sentiment: Sentiment,
    /// Sentiment intensity in [0,1]: mean rating / 5, two decimals
    pub confidence: f64,
}

impl AnalysisResult {
    /// Aggregate per-sentence ratings into one result
    ///
    /// An empty rating sequence (nothing to score, or every sentence
    /// failed) yields the `NotDetected` sentinel with confidence 0.0.
    /// Otherwise the unweighted mean of the ratings selects the bucket
    /// and the confidence is `mean / 5` rounded to two decimals, which
    /// lands in [0.2, 1.0].
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::{AnalysisResult, SentimentBucket, StarRating};
    ///
    /// let ratings = [StarRating::try_new(5).unwrap()];
    /// let result = AnalysisResult::from_ratings("me encanta", &ratings);
    /// assert_eq!(result.sentiment.bucket(), Some(SentimentBucket::VeryPositive));
    /// assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    /// ```
    pub fn from_ratings(text: impl Into<String>, ratings: &[StarRating]) -> Self {
        if ratings.is_empty() {
            return Self {
                text: text.into(),
                sentiment: Sentiment::NotDetected,
                confidence: 0.0,
            };
        }

        let sum: u32 = ratings.iter().map(|r| u32::from(r.value())).sum();
        #[allow(clippy::cast_precision_loss)] // sentence counts are tiny
        let mean = f64::from(sum) / ratings.len() as f64;
        let confidence = (mean / 5.0 * 100.0).round() / 100.0;

        Self {
            text: text.into(),
            sentiment: Sentiment::Detected(SentimentBucket::from_mean(mean)),
            confidence,
        }
    }

    /// Whether any sentence contributed a rating
    pub const fn is_detected(&self) -> bool {
        self.sentiment.is_detected()
    }

    /// Label stored in history and shown to callers, e.g. `"🙂 Positive"`
    pub fn display_label(&self) -> String {
        self.sentiment.to_string()
    }
}

/// Acknowledgment for an analysis accepted for deferred execution
///
/// The caller re-queries history for the outcome; the ticket only proves
/// the request was queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisTicket {
    pub id: Uuid,
    pub accepted_at: DateTime<Utc>,
}

impl AnalysisTicket {
    /// Create a ticket with a fresh id, stamped now
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            accepted_at: Utc::now(),
        }
    }
}

impl Default for AnalysisTicket {
    fn default() -> Self {
        Self::new()
    }
}
