//! SQLite user store implementation
//!
//! Implements the `UserStore` port using SQLite. Only password hashes are
//! ever written here; plaintext never reaches this layer.

use std::sync::Arc;

use application::{error::ApplicationError, ports::UserStore};
use async_trait::async_trait;
use chrono::Utc;
use domain::Username;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based user store
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserStore {
    /// Create a new SQLite user store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    #[instrument(skip(self, password_hash), fields(username = %username))]
    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let username = username.clone();
        let password_hash = password_hash.to_string();
        let now = Utc::now().to_rfc3339();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            conn.execute(
                "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
                params![username.as_str(), password_hash, now],
            )
            .map_err(|e| match e {
                // The UNIQUE constraint on username is the duplicate check
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    ApplicationError::UsernameTaken(username.to_string())
                }
                other => ApplicationError::Storage(other.to_string()),
            })?;

            debug!("Created user");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(username = %username))]
    async fn exists(&self, username: &Username) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let username = username.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM users WHERE username = ?1",
                    params![username],
                    |row| row.get(0),
                )
                .optional()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            Ok(found.is_some())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(username = %username))]
    async fn password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<String>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let username = username.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            conn.query_row(
                "SELECT password_hash FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ApplicationError::Storage(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
