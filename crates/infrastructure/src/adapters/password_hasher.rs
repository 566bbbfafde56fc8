//! Password hashing using Argon2
//!
//! Implements the `PasswordHasherPort` using the Argon2id algorithm,
//! which is recommended for password hashing due to its resistance to
//! GPU-based attacks and side-channel attacks.
//!
//! # Examples
//!
//! ```
//! use application::ports::PasswordHasherPort;
//! use infrastructure::adapters::Argon2PasswordHasher;
//!
//! let hasher = Argon2PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//!
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//! assert!(!hasher.verify("wrong-password", &hash).unwrap());
//! ```

use application::{error::ApplicationError, ports::PasswordHasherPort};
use argon2::{
    Argon2, PasswordHash, PasswordHasher as ArgonPasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::{debug, instrument};

/// Argon2id password hasher
///
/// Uses the library's default parameters (19 MiB memory, 2 iterations),
/// which are the current OWASP recommendation. Hashes are stored in
/// self-describing PHC format, so parameters can be raised later without
/// invalidating existing accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new password hasher with default parameters
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    #[instrument(skip(self, password))]
    fn hash(&self, password: &str) -> Result<String, ApplicationError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Internal(format!("Failed to hash password: {e}")))?;

        debug!("Hashed password");
        Ok(hash.to_string())
    }

    #[instrument(skip(self, password, hash))]
    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApplicationError> {
        // A stored hash we cannot parse is data corruption, not a failed login
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApplicationError::Internal(format!("Invalid password hash: {e}")))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_creates_valid_phc_format() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hash.contains("$v="));
        assert!(hash.contains("$m="));
    }

    #[test]
    fn verify_correct_password_succeeds() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(hasher.verify("hunter2", &hash).unwrap());
    }

    #[test]
    fn verify_wrong_password_fails() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("hunter2").unwrap();

        assert!(!hasher.verify("hunter3", &hash).unwrap());
    }

    #[test]
    fn verify_invalid_hash_returns_error() {
        let hasher = Argon2PasswordHasher::new();
        let result = hasher.verify("hunter2", "not-a-phc-hash");

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }

    #[test]
    fn hash_produces_different_hashes_for_same_input() {
        let hasher = Argon2PasswordHasher::new();
        let hash1 = hasher.hash("hunter2").unwrap();
        let hash2 = hasher.hash("hunter2").unwrap();

        // Fresh salt every time
        assert_ne!(hash1, hash2);
        assert!(hasher.verify("hunter2", &hash1).unwrap());
        assert!(hasher.verify("hunter2", &hash2).unwrap());
    }

    #[test]
    fn unicode_passwords_round_trip() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("contraseña-añeja").unwrap();

        assert!(hasher.verify("contraseña-añeja", &hash).unwrap());
    }
}
