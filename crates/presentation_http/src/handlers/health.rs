//! Liveness and readiness probes

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Liveness body: the process is up and knows its version
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness body, `ready` mirrors the classifier being reachable
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub classifier: ClassifierStatus,
}

/// Classifier probe outcome; the model name is reported only while up
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifierStatus {
    pub healthy: bool,
    pub model: Option<String>,
}

/// GET /ready
///
/// Answers 503 until the classifier responds to its health endpoint,
/// so load balancers hold traffic while the model is still loading.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let healthy = state.analysis_service.is_healthy().await;

    let body = ReadinessResponse {
        ready: healthy,
        classifier: ClassifierStatus {
            healthy,
            model: healthy.then(|| state.analysis_service.classifier_model()),
        },
    };

    let status = if body.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_reports_ok_and_version() {
        let Json(body) = health_check().await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn readiness_serializes_the_model_when_up() {
        let body = ReadinessResponse {
            ready: true,
            classifier: ClassifierStatus {
                healthy: true,
                model: Some("nlptown/bert-base-multilingual-uncased-sentiment".to_string()),
            },
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""ready":true"#));
        assert!(json.contains("nlptown"));
    }

    #[test]
    fn readiness_serializes_null_model_when_down() {
        let body = ReadinessResponse {
            ready: false,
            classifier: ClassifierStatus {
                healthy: false,
                model: None,
            },
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""ready":false"#));
        assert!(json.contains(r#""model":null"#));
    }

    #[test]
    fn readiness_round_trips() {
        let json = r#"{"ready":true,"classifier":{"healthy":true,"model":"m"}}"#;
        let parsed: ReadinessResponse = serde_json::from_str(json).unwrap();

        assert!(parsed.ready);
        assert_eq!(parsed.classifier.model.as_deref(), Some("m"));
    }
}
