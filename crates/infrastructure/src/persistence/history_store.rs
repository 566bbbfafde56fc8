//! SQLite history store implementation
//!
//! Implements the `HistoryStore` port using SQLite. Listing always returns
//! the newest record first.

use std::sync::Arc;

use application::{error::ApplicationError, ports::HistoryStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{HistoryEntry, Username};
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based history store
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteHistoryStore {
    /// Create a new SQLite history store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

/// Convert a database row to a `HistoryEntry`
fn row_to_entry(row: &Row<'_>) -> Result<HistoryEntry, rusqlite::Error> {
    let username_str: String = row.get(0)?;
    let text: String = row.get(1)?;
    let sentiment: String = row.get(2)?;
    let confidence: f64 = row.get(3)?;
    let recorded_at_str: String = row.get(4)?;

    let username = Username::new(username_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    Ok(HistoryEntry {
        username,
        text,
        sentiment,
        confidence,
        recorded_at,
    })
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    #[instrument(skip(self, entry), fields(username = %entry.username))]
    async fn append(&self, entry: &HistoryEntry) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let entry = entry.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            conn.execute(
                "INSERT INTO history (username, text, sentiment, confidence, recorded_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entry.username.as_str(),
                    entry.text,
                    entry.sentiment,
                    entry.confidence,
                    entry.recorded_at.to_rfc3339(),
                ],
            )
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            debug!("Recorded analysis");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(username = %username))]
    async fn list_by_user(
        &self,
        username: &Username,
    ) -> Result<Vec<HistoryEntry>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let username = username.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let mut stmt = conn
                .prepare(
                    "SELECT username, text, sentiment, confidence, recorded_at
                     FROM history
                     WHERE username = ?1
                     ORDER BY recorded_at DESC, id DESC",
                )
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            let entries = stmt
                .query_map(params![username], row_to_entry)
                .map_err(|e| ApplicationError::Storage(e.to_string()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Storage(e.to_string()))?;

            Ok(entries)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::create_pool;
    use domain::{AnalysisResult, StarRating};

    fn setup_test_db() -> Arc<ConnectionPool> {
        Arc::new(create_pool(&DatabaseConfig::in_memory()).unwrap())
    }

    fn entry_for(username: &str, text: &str) -> HistoryEntry {
        let result = AnalysisResult::from_ratings(text, &[StarRating::try_new(5).unwrap()]);
        HistoryEntry::new(Username::new(username).unwrap(), &result)
    }

    #[tokio::test]
    async fn append_and_list_round_trip() {
        let store = SqliteHistoryStore::new(setup_test_db());
        let entry = entry_for("maria", "buen producto");

        store.append(&entry).await.unwrap();

        let listed = store
            .list_by_user(&Username::new("maria").unwrap())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "buen producto");
        assert_eq!(listed[0].sentiment, entry.sentiment);
        assert!((listed[0].confidence - entry.confidence).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = SqliteHistoryStore::new(setup_test_db());
        let maria = Username::new("maria").unwrap();

        let old = entry_for("maria", "first review")
            .with_recorded_at(Utc::now() - chrono::Duration::hours(2));
        let recent = entry_for("maria", "second review");

        store.append(&old).await.unwrap();
        store.append(&recent).await.unwrap();

        let listed = store.list_by_user(&maria).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "second review");
        assert_eq!(listed[1].text, "first review");
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_user() {
        let store = SqliteHistoryStore::new(setup_test_db());

        store.append(&entry_for("maria", "hers")).await.unwrap();
        store.append(&entry_for("jose", "his")).await.unwrap();

        let listed = store
            .list_by_user(&Username::new("maria").unwrap())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "hers");
    }

    #[tokio::test]
    async fn user_without_records_lists_empty() {
        let store = SqliteHistoryStore::new(setup_test_db());

        let listed = store
            .list_by_user(&Username::new("nobody").unwrap())
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
