//! Account registration and login handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Registration / login request body
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Account name, canonicalized to lowercase
    pub username: String,
    /// Plaintext password, only ever stored hashed
    pub password: String,
}

/// Registration / login response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Canonical username the account is stored under
    pub username: String,
    /// Human-readable outcome
    pub message: String,
}

/// Register a new account
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = state
        .account_service
        .register(&request.username, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            username: username.to_string(),
            message: "User created".to_string(),
        }),
    ))
}

/// Verify credentials for an existing account
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let username = state
        .account_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(AuthResponse {
        username: username.to_string(),
        message: "Login successful".to_string(),
    }))
}
