//! Port definitions for classifier clients
//!
//! Defines the trait that classifier adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// The winning label for one piece of text
///
/// Labels from the star-rating models look like `"5 stars"` or
/// `"1 star"`; the score is the model's probability for that label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Port for classifier client implementations
#[async_trait]
pub trait ClassifierEngine: Send + Sync {
    /// Classify one piece of text and return the top candidate
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;

    /// Check if the classification server is healthy
    async fn health_check(&self) -> Result<bool, ClassifierError>;

    /// Get the configured model name
    fn model(&self) -> &str;
}
