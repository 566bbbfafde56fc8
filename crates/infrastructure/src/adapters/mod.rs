//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod classifier_adapter;
mod password_hasher;

pub use classifier_adapter::HfClassifierAdapter;
pub use password_hasher::Argon2PasswordHasher;
