//! History store port
//!
//! Defines the interface for recording and listing per-user analyses.

use async_trait::async_trait;
use domain::{HistoryEntry, Username};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for analysis history storage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one record
    async fn append(&self, entry: &HistoryEntry) -> Result<(), ApplicationError>;

    /// All records for a user, newest first
    ///
    /// A user with no records yields an empty vector, not an error.
    async fn list_by_user(
        &self,
        username: &Username,
    ) -> Result<Vec<HistoryEntry>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple compile-time verification that the trait is object-safe
    fn _assert_object_safe(_: &dyn HistoryStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn HistoryStore>();
    }
}
