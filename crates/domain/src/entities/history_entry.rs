//! Per-user analysis history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::AnalysisResult;
use crate::value_objects::Username;

/// One recorded analysis, as stored and listed per user
///
/// The sentiment is kept as the display label string the analysis
/// produced (for example `"😃 Very Positive"`); history listing never
/// needs to reason about buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub username: Username,
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build the record for a just-produced result, stamped now
    pub fn new(username: Username, result: &AnalysisResult) -> Self {
        Self {
            username,
            text: result.text.clone(),
            sentiment: result.display_label(),
            confidence: result.confidence,
            recorded_at: Utc::now(),
        }
    }

    /// Override the timestamp, for deterministic tests and row mapping
    #[must_use]
    pub fn with_recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }
}
