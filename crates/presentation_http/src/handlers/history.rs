//! Analysis history handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use domain::{HistoryEntry, Username};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// One recorded analysis in a history listing
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub recorded_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            text: entry.text,
            sentiment: entry.sentiment,
            confidence: entry.confidence,
            recorded_at: entry.recorded_at,
        }
    }
}

/// List a user's analyses, newest first
///
/// Unknown users get an empty array, same as registered users with no
/// records yet.
#[instrument(skip(state))]
pub async fn get_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<HistoryEntryResponse>>, ApiError> {
    let username =
        Username::new(&username).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let entries = state.analysis_service.list_history(&username).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
