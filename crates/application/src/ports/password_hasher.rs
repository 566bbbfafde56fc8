//! Password hasher port
//!
//! Keeps the hashing scheme out of the application layer; the account
//! service only ever sees opaque hash strings.

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for password hashing and verification
#[cfg_attr(test, automock)]
pub trait PasswordHasherPort: Send + Sync {
    /// Hash a plaintext password with a fresh salt
    fn hash(&self, password: &str) -> Result<String, ApplicationError>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApplicationError>;
}
