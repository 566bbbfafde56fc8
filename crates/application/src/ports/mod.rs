//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod classifier_port;
mod history_store;
mod password_hasher;
mod user_store;

#[cfg(test)]
pub use classifier_port::MockClassifierPort;
pub use classifier_port::{ClassifierPort, SentenceClassification};
#[cfg(test)]
pub use history_store::MockHistoryStore;
pub use history_store::HistoryStore;
#[cfg(test)]
pub use password_hasher::MockPasswordHasherPort;
pub use password_hasher::PasswordHasherPort;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;
