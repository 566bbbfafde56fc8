//! SQLite settings.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Where the database lives and how it is opened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path, or ":memory:" for a throwaway database
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Apply pending migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// In-memory database for tests; a single connection, because each
    /// SQLite memory connection is its own private database
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
            run_migrations: true,
        }
    }
}

fn default_db_path() -> String {
    "sentimeter.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "sentimeter.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
    }

    #[test]
    fn in_memory_uses_one_connection() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.path, ":memory:");
        assert_eq!(config.max_connections, 1);
    }
}
