//! Classifier adapter - Implements ClassifierPort using ai_core

use ai_core::{
    Classification, ClassifierConfig, ClassifierEngine, ClassifierError, HfClassifierEngine,
};
use application::{
    error::ApplicationError,
    ports::{ClassifierPort, SentenceClassification},
};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter for the HTTP star-rating classifier
#[derive(Debug)]
pub struct HfClassifierAdapter {
    engine: HfClassifierEngine,
}

impl HfClassifierAdapter {
    /// Create a new adapter with the given configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ApplicationError> {
        let engine = HfClassifierEngine::new(config)
            .map_err(|e| ApplicationError::Classification(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Create with the default multilingual sentiment model
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(ClassifierConfig::nlptown())
    }

    /// Convert ai_core error to application error
    fn map_error(e: ClassifierError) -> ApplicationError {
        match e {
            ClassifierError::ConnectionFailed(msg) => {
                ApplicationError::Classification(format!("Classifier connection failed: {msg}"))
            },
            ClassifierError::Timeout(ms) => {
                ApplicationError::Classification(format!("Classification timeout after {ms}ms"))
            },
            other => ApplicationError::Classification(other.to_string()),
        }
    }
}

#[async_trait]
impl ClassifierPort for HfClassifierAdapter {
    #[instrument(skip(self, sentence), fields(sentence_len = sentence.len()))]
    async fn classify(&self, sentence: &str) -> Result<SentenceClassification, ApplicationError> {
        let Classification { label, score } = self
            .engine
            .classify(sentence)
            .await
            .map_err(Self::map_error)?;

        Ok(SentenceClassification { label, score })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn model(&self) -> String {
        self.engine.model().to_string()
    }
}
