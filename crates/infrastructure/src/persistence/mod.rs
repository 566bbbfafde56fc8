//! SQLite storage for accounts and analysis history.

pub mod connection;
pub mod history_store;
pub mod migrations;
pub mod user_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use history_store::SqliteHistoryStore;
pub use user_store::SqliteUserStore;
