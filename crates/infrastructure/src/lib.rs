//! Outward-facing adapters for Sentimeter
//!
//! Implements the application layer ports: SQLite storage for accounts
//! and history, Argon2 password hashing, and the HTTP adapter for the
//! star-rating classifier.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::*;
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use persistence::{
    ConnectionPool, DatabaseError, SqliteHistoryStore, SqliteUserStore, create_pool,
};
