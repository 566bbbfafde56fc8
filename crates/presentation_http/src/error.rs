//! HTTP error mapping
//!
//! Translates application errors into HTTP statuses with JSON bodies. A
//! runtime flag decides whether internal failure details reach clients;
//! domain validation messages always pass through untouched.

use application::error::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Controls whether internal error details reach response bodies
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Set at startup from `server.expose_internal_errors`; production
/// deployments turn this off so backend URLs and SQL messages never
/// reach clients.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// Errors a handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status and stable machine-readable code for each variant
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            },
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

/// JSON body carried by every error status
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: String,
    /// Internal detail, present only when exposure is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let (message, details) = match self {
            // 4xx messages are validation and lookup strings built by
            // this codebase; the Unauthorized one is already the fixed
            // credentials phrase, so unknown users and wrong passwords
            // stay indistinguishable
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::NotFound(msg) => (msg, None),
            // Classifier failures may quote the backend response
            Self::ServiceUnavailable(msg) => {
                if should_expose_details() {
                    (msg, None)
                } else {
                    ("Service temporarily unavailable".to_string(), None)
                }
            },
            Self::Internal(msg) => {
                let details = should_expose_details().then_some(msg);
                ("An internal error occurred".to_string(), details)
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::UsernameTaken(username) => {
                Self::BadRequest(format!("Username already taken: {username}"))
            },
            ApplicationError::InvalidPassword(msg) => {
                Self::BadRequest(format!("Invalid password: {msg}"))
            },
            ApplicationError::InvalidCredentials => {
                Self::Unauthorized("Invalid username or password".to_string())
            },
            ApplicationError::UserNotFound(username) => {
                Self::NotFound(format!("User not found: {username}"))
            },
            ApplicationError::Classification(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Storage(msg) | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
