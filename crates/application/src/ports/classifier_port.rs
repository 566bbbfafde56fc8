//! Classifier port - Interface for per-sentence star-rating classification

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// What the classifier says about one sentence
#[derive(Debug, Clone)]
pub struct SentenceClassification {
    /// Label encoding the star rating, e.g. `"4 stars"`
    pub label: String,
    /// The classifier's own confidence for that label
    pub score: f64,
}

/// Port for the external star-rating classifier
///
/// The backend is a pretrained multilingual model that grades a sentence
/// 1-5 stars. It is initialized once at startup and shared read-only
/// across requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Classify a single sentence
    async fn classify(&self, sentence: &str) -> Result<SentenceClassification, ApplicationError>;

    /// Check if the classifier backend is reachable
    async fn is_healthy(&self) -> bool;

    /// Name of the model behind the port
    fn model(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple compile-time verification that the trait is object-safe
    fn _assert_object_safe(_: &dyn ClassifierPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ClassifierPort>();
    }

    #[test]
    fn classification_is_cloneable() {
        let classification = SentenceClassification {
            label: "5 stars".to_string(),
            score: 0.91,
        };
        let copy = classification.clone();
        assert_eq!(copy.label, "5 stars");
        assert!((copy.score - 0.91).abs() < f64::EPSILON);
    }
}
