//! Validation errors raised by domain types

use thiserror::Error;

/// Rejections from value object constructors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid username format
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Star rating outside the 1-5 range
    #[error("Invalid star rating: {0} (expected 1-5)")]
    InvalidStarRating(u8),
}
