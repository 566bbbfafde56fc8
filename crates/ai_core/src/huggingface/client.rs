//! Hugging Face inference client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::ports::{Classification, ClassifierEngine};

/// Star-rating classifier over the text-classification inference API
#[derive(Debug)]
pub struct HfClassifierEngine {
    client: Client,
    config: ClassifierConfig,
}

impl HfClassifierEngine {
    /// Create a new classifier engine
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClassifierError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized classifier engine"
        );

        Ok(Self { client, config })
    }

    /// Create with the default local-server configuration
    pub fn with_defaults() -> Result<Self, ClassifierError> {
        Self::new(ClassifierConfig::nlptown())
    }

    /// Build the inference URL for the configured model
    fn model_url(&self) -> String {
        format!("{}/models/{}", self.config.base_url, self.config.model)
    }
}

/// Inference request body
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// Candidate list, nested when the pipeline answers in batch form
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<Candidate>>),
    Flat(Vec<Candidate>),
}

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    score: f64,
}

impl ClassifyResponse {
    /// The highest-scoring candidate for the first (only) input
    fn into_top_candidate(self) -> Option<Candidate> {
        let candidates = match self {
            Self::Nested(mut groups) => {
                if groups.is_empty() {
                    return None;
                }
                groups.swap_remove(0)
            },
            Self::Flat(candidates) => candidates,
        };

        candidates
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[async_trait]
impl ClassifierEngine for HfClassifierEngine {
    #[instrument(skip(self, text), fields(model = %self.config.model, text_chars = text.chars().count()))]
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        debug!("Sending classification request");

        let mut request = self
            .client
            .post(self.model_url())
            .json(&ClassifyRequest { inputs: text });

        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Classification request failed");
            return Err(ClassifierError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let parsed: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let top = parsed
            .into_top_candidate()
            .ok_or(ClassifierError::EmptyResponse)?;

        debug!(label = %top.label, score = top.score, "Classification completed");

        Ok(Classification {
            label: top.label,
            score: top.score,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, ClassifierError> {
        let response = self
            .client
            .get(format!("{}/health", self.config.base_url))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() => Ok(false),
            Err(e) if e.is_connect() => Ok(false),
            Err(e) => Err(ClassifierError::RequestFailed(e.to_string())),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(label: &str, score: f64) -> Candidate {
        Candidate {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn config_creates_correct_urls() {
        let engine = HfClassifierEngine::new(ClassifierConfig::default()).unwrap();
        assert_eq!(
            engine.model_url(),
            "http://localhost:8080/models/nlptown/bert-base-multilingual-uncased-sentiment"
        );
    }

    #[test]
    fn default_model_is_the_multilingual_star_rater() {
        let engine = HfClassifierEngine::with_defaults().unwrap();
        assert_eq!(
            engine.model(),
            "nlptown/bert-base-multilingual-uncased-sentiment"
        );
    }

    #[test]
    fn flat_candidates_pick_the_highest_score() {
        let response = ClassifyResponse::Flat(vec![
            candidate("1 star", 0.05),
            candidate("5 stars", 0.80),
            candidate("4 stars", 0.15),
        ]);
        let top = response.into_top_candidate().unwrap();
        assert_eq!(top.label, "5 stars");
    }

    #[test]
    fn nested_candidates_use_the_first_group() {
        let response = ClassifyResponse::Nested(vec![vec![
            candidate("2 stars", 0.6),
            candidate("3 stars", 0.4),
        ]]);
        let top = response.into_top_candidate().unwrap();
        assert_eq!(top.label, "2 stars");
    }

    #[test]
    fn empty_candidate_lists_yield_none() {
        assert!(ClassifyResponse::Flat(vec![]).into_top_candidate().is_none());
        assert!(
            ClassifyResponse::Nested(vec![])
                .into_top_candidate()
                .is_none()
        );
        assert!(
            ClassifyResponse::Nested(vec![vec![]])
                .into_top_candidate()
                .is_none()
        );
    }

    #[test]
    fn both_wire_shapes_deserialize() {
        let nested: ClassifyResponse =
            serde_json::from_str(r#"[[{"label":"5 stars","score":0.9}]]"#).unwrap();
        assert!(matches!(nested, ClassifyResponse::Nested(_)));

        let flat: ClassifyResponse =
            serde_json::from_str(r#"[{"label":"5 stars","score":0.9}]"#).unwrap();
        assert!(matches!(flat, ClassifyResponse::Flat(_)));
    }
}
