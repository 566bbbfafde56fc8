//! SQLite connection pooling
//!
//! Session pragmas ride on the manager's init hook so every pooled
//! connection carries them, not just the one that happened to run
//! first. Foreign keys and the busy timeout are per-connection
//! settings in SQLite; WAL sticks to the database file itself.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::persistence::migrations::run_migrations;

/// Failures while opening the database or preparing its schema
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection pool: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("filesystem: {0}")]
    Io(#[from] std::io::Error),

    #[error("migration: {0}")]
    Migration(String),
}

/// Pool of SQLite connections shared by the stores
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Open the pool described by `config` and, unless disabled, bring the
/// schema up to date
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    let manager = manager_for(config)?.with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        run_migrations(&conn)?;
    }

    info!(
        path = %config.path,
        connections = config.max_connections,
        "SQLite pool ready"
    );

    Ok(pool)
}

fn manager_for(config: &DatabaseConfig) -> Result<SqliteConnectionManager, DatabaseError> {
    if config.path == ":memory:" {
        return Ok(SqliteConnectionManager::memory());
    }

    let path = Path::new(&config.path);

    // r2d2-sqlite creates a missing file, but not missing directories
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    Ok(SqliteConnectionManager::file(path))
}
