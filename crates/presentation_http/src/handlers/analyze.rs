//! Sentiment analysis handlers

use axum::{Json, extract::State, http::StatusCode};
use domain::Username;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Analysis request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Account the analysis is recorded under
    pub username: String,
    /// Raw text to score
    pub text: String,
}

/// Analysis response body
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The text as submitted
    pub text: String,
    /// Sentiment display label, e.g. `"🙂 Positive"`
    pub sentiment: String,
    /// Aggregate confidence in [0, 1]; 0.0 when nothing scored
    pub confidence: f64,
}

/// Deferred analysis response body
#[derive(Debug, Serialize)]
pub struct DeferredResponse {
    /// Ticket identifying the queued run
    pub id: Uuid,
    /// Always `"queued"`
    pub status: String,
}

/// Run the pipeline synchronously and return the aggregate result
#[instrument(skip(state, request), fields(username = %request.username, text_len = request.text.len()))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let username = Username::new(&request.username)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let result = state
        .analysis_service
        .analyze(&username, &request.text)
        .await?;

    Ok(Json(AnalyzeResponse {
        text: result.text.clone(),
        sentiment: result.display_label(),
        confidence: result.confidence,
    }))
}

/// Queue the pipeline and acknowledge immediately
#[instrument(skip(state, request), fields(username = %request.username, text_len = request.text.len()))]
pub async fn analyze_deferred(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<DeferredResponse>), ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let username = Username::new(&request.username)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let ticket = state
        .analysis_service
        .enqueue_analysis(&username, &request.text)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(DeferredResponse {
            id: ticket.id,
            status: "queued".to_string(),
        }),
    ))
}
