//! User store port
//!
//! Defines the interface for account persistence. Passwords cross this
//! boundary only in hashed form; hashing itself is the
//! [`PasswordHasherPort`](crate::ports::PasswordHasherPort)'s concern.

use async_trait::async_trait;
use domain::Username;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for user account storage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user with an already-hashed password
    ///
    /// Uniqueness is enforced by the store; a duplicate username yields
    /// [`ApplicationError::UsernameTaken`].
    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<(), ApplicationError>;

    /// Whether the username is registered
    async fn exists(&self, username: &Username) -> Result<bool, ApplicationError>;

    /// Stored password hash, `None` for unknown users
    async fn password_hash(&self, username: &Username)
    -> Result<Option<String>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple compile-time verification that the trait is object-safe
    fn _assert_object_safe(_: &dyn UserStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UserStore>();
    }
}
