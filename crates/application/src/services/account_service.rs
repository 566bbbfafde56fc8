//! Account service - registration and login

use std::{fmt, sync::Arc};

use domain::Username;
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{PasswordHasherPort, UserStore},
};

/// Service for registering users and verifying their credentials
///
/// Passwords exist in plaintext only inside these two methods; the store
/// sees hashes and history never sees credentials at all.
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    /// Create a new account service
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { users, hasher }
    }

    /// Register a new account
    ///
    /// The username is trimmed and lowercased before validation, so
    /// registration and login agree on case. Blank passwords are
    /// rejected before hashing.
    #[instrument(skip(self, password), fields(username = raw_username))]
    pub async fn register(
        &self,
        raw_username: &str,
        password: &str,
    ) -> Result<Username, ApplicationError> {
        let username = Username::new(raw_username)?;

        if password.trim().is_empty() {
            return Err(ApplicationError::InvalidPassword(
                "password must not be blank".to_string(),
            ));
        }

        let hash = self.hasher.hash(password)?;
        self.users.create(&username, &hash).await?;

        debug!("User registered");
        Ok(username)
    }

    /// Verify credentials for an existing account
    ///
    /// Unknown usernames, malformed usernames, and wrong passwords are
    /// indistinguishable to the caller.
    #[instrument(skip(self, password), fields(username = raw_username))]
    pub async fn login(
        &self,
        raw_username: &str,
        password: &str,
    ) -> Result<Username, ApplicationError> {
        // A malformed username cannot name an account
        let Ok(username) = Username::new(raw_username) else {
            return Err(ApplicationError::InvalidCredentials);
        };

        let Some(hash) = self.users.password_hash(&username).await? else {
            return Err(ApplicationError::InvalidCredentials);
        };

        if self.hasher.verify(password, &hash)? {
            debug!("Login verified");
            Ok(username)
        } else {
            Err(ApplicationError::InvalidCredentials)
        }
    }
}
