//! Classifier client settings

use serde::{Deserialize, Serialize};

/// Endpoint, model, and timeout for the star-rating classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Base URL of the classification server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to classify with
    #[serde(default = "default_model")]
    pub model: String,

    /// How long to wait for one classification, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Bearer token, required by hosted inference endpoints
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_model() -> String {
    "nlptown/bert-base-multilingual-uncased-sentiment".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds, covers model cold starts
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            api_token: None,
        }
    }
}

impl ClassifierConfig {
    /// Config for the nlptown multilingual 1-5 star model on a local server
    pub fn nlptown() -> Self {
        Self::default()
    }

    /// Config for the hosted Hugging Face Inference API
    pub fn hosted_api(api_token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            api_token: Some(api_token.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_nlptown() {
        let config = ClassifierConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(
            config.model,
            "nlptown/bert-base-multilingual-uncased-sentiment"
        );
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn nlptown_config_matches_default() {
        let config = ClassifierConfig::nlptown();
        assert_eq!(
            config.model,
            "nlptown/bert-base-multilingual-uncased-sentiment"
        );
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn hosted_api_config_carries_the_token() {
        let config = ClassifierConfig::hosted_api("hf_test");
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
        assert_eq!(config.api_token.as_deref(), Some("hf_test"));
    }

    #[test]
    fn serializes_field_names() {
        let config = ClassifierConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("base_url"));
        assert!(json.contains("model"));
    }

    #[test]
    fn deserializes_custom_endpoint() {
        let json = r#"{"base_url":"http://custom:9090","model":"my-model"}"#;
        let config: ClassifierConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://custom:9090");
        assert_eq!(config.model, "my-model");
    }

    #[test]
    fn empty_json_gets_all_defaults() {
        let json = r"{}";
        let config: ClassifierConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn debug_output_names_the_struct() {
        let config = ClassifierConfig::default();
        let debug = format!("{config:?}");
        assert!(debug.contains("ClassifierConfig"));
        assert!(debug.contains("base_url"));
    }

    #[test]
    fn clone_keeps_the_token() {
        let config = ClassifierConfig::hosted_api("hf_test");
        let cloned = config.clone();
        assert_eq!(config.base_url, cloned.base_url);
        assert_eq!(config.api_token, cloned.api_token);
    }
}
