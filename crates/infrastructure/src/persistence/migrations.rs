//! Versioned schema migrations
//!
//! Embedded migration steps applied at startup. Every step
//! that applies is recorded as a row in `schema_migrations`, so a failed
//! step leaves the recorded version at the last good one and the next
//! start retries from there. The SQL files under `/migrations` document
//! the same schema for manual setup.

use chrono::Utc;
use rusqlite::{Connection, params};
use tracing::{debug, error, info};

use super::connection::DatabaseError;

type Migration = fn(&Connection) -> Result<(), DatabaseError>;

/// Applied in ascending order; append new steps at the end
const MIGRATIONS: &[(i32, &str, Migration)] = &[(1, "initial schema", migrate_v1)];

/// Bring the schema up to the latest version
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current = schema_version(conn)?;
    let target = MIGRATIONS.last().map_or(0, |(version, _, _)| *version);

    if current >= target {
        debug!(version = current, "Database schema is up to date");
        return Ok(());
    }

    info!(
        from_version = current,
        to_version = target,
        "Running database migrations"
    );

    for (version, description, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        debug!(version = *version, description = *description, "Applying migration");

        if let Err(e) = migrate(conn) {
            error!(
                version = *version,
                error = %e,
                "Migration failed, recorded schema version stays at the last applied step"
            );
            return Err(e);
        }

        record_migration(conn, *version, description)?;
    }

    info!(version = target, "Database migrations complete");
    Ok(())
}

/// Highest recorded migration version, creating the ledger if needed
fn schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
        [],
    )?;

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Record one applied migration in the ledger
fn record_migration(
    conn: &Connection,
    version: i32,
    description: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO schema_migrations (version, description, applied_at) VALUES (?1, ?2, ?3)",
        params![version, description, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// v1: users, history, and the per-user history index.
/// See: migrations/V001__initial_schema.sql
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "
        -- Users table
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        -- Analysis history table
        CREATE TABLE IF NOT EXISTS history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            text TEXT NOT NULL,
            sentiment TEXT NOT NULL,
            confidence REAL NOT NULL,
            recorded_at TEXT NOT NULL
        );

        -- History is always read per-user, newest first
        CREATE INDEX IF NOT EXISTS idx_history_user_recorded
            ON history(username, recorded_at);
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_mem() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn initial_schema_creates_both_tables() {
        let conn = open_mem();
        run_migrations(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"history".to_string()));
    }

    #[test]
    fn ledger_records_each_applied_step() {
        let conn = open_mem();
        run_migrations(&conn).unwrap();

        let (version, description, applied_at): (i32, String, String) = conn
            .query_row(
                "SELECT version, description, applied_at FROM schema_migrations",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(version, 1);
        assert_eq!(description, "initial schema");
        assert!(!applied_at.is_empty());

        assert_eq!(schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn rerunning_does_not_duplicate_ledger_rows() {
        let conn = open_mem();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn usernames_are_unique() {
        let conn = open_mem();
        run_migrations(&conn).unwrap();

        conn.execute(
            "INSERT INTO users (username, password_hash, created_at) VALUES ('maria', 'h1', '2024-01-01')",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO users (username, password_hash, created_at) VALUES ('maria', 'h2', '2024-01-02')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn history_index_exists() {
        let conn = open_mem();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name='idx_history_user_recorded'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
