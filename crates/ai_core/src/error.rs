//! Classifier errors

use thiserror::Error;

/// Errors that can occur while classifying
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Failed to connect to the classification server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the classification server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The server answered with an empty candidate list
    #[error("Classifier returned no candidates")]
    EmptyResponse,

    /// Timeout during classification
    #[error("Classification timeout after {0}ms")]
    Timeout(u64),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClassifierError::Timeout(30000)
        } else if err.is_connect() {
            ClassifierError::ConnectionFailed(err.to_string())
        } else {
            ClassifierError::RequestFailed(err.to_string())
        }
    }
}
