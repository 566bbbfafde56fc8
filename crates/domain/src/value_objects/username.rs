//! Username value object with validation
//!
//! Provides a validated account identifier used for registration, login,
//! analysis requests, and history listing.
//!
//! # Examples
//!
//! ```
//! use domain::Username;
//!
//! // Create a valid username
//! let user = Username::new("maria_92").unwrap();
//! assert_eq!(user.as_str(), "maria_92");
//!
//! // Usernames are normalized to lowercase
//! let user = Username::new("Maria_92").unwrap();
//! assert_eq!(user.as_str(), "maria_92");
//!
//! // Unsupported characters are rejected
//! assert!(Username::new("maría!").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated account username
///
/// Three to thirty-two characters from `[a-z0-9._-]`, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Username {
    #[validate(length(min = 3, max = 32))]
    value: String,
}

impl Username {
    /// Create a new username, validating length and character set
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::Username;
    ///
    /// let user = Username::new("carlos.v").unwrap();
    /// assert_eq!(user.to_string(), "carlos.v");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the username is shorter than 3 or longer than 32
    /// characters, or contains characters outside `[a-z0-9._-]`.
    pub fn new(username: impl Into<String>) -> Result<Self, DomainError> {
        let value = username.into().trim().to_lowercase();

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidUsername(e.to_string()))?;

        if !candidate
            .value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(DomainError::InvalidUsername(format!(
                "unsupported character in '{}'",
                candidate.value
            )));
        }

        Ok(candidate)
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
