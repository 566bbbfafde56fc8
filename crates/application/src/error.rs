//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Classifier call or response error
    #[error("Classification error: {0}")]
    Classification(String),

    /// Analysis requested for a user that is not registered
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Registration with a username that is already registered
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Registration with a password that fails policy
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// Login with an unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Classification(_) | Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_pass_through_transparently() {
        let err: ApplicationError = DomainError::InvalidUsername("a!".to_string()).into();
        assert_eq!(err.to_string(), "Invalid username: a!");
    }

    #[test]
    fn user_not_found_names_the_user() {
        let err = ApplicationError::UserNotFound("maria_92".to_string());
        assert_eq!(err.to_string(), "User not found: maria_92");
    }

    #[test]
    fn invalid_credentials_does_not_leak_details() {
        assert_eq!(
            ApplicationError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn invalid_password_carries_the_reason() {
        let err = ApplicationError::InvalidPassword("must not be blank".to_string());
        assert_eq!(err.to_string(), "Invalid password: must not be blank");
    }

    #[test]
    fn transient_errors_are_retryable() {
        assert!(ApplicationError::Classification("timeout".to_string()).is_retryable());
        assert!(ApplicationError::Storage("locked".to_string()).is_retryable());
        assert!(!ApplicationError::InvalidCredentials.is_retryable());
        assert!(!ApplicationError::UserNotFound("x".to_string()).is_retryable());
    }
}
