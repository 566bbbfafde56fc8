//! Request handlers, one module per resource

pub mod analyze;
pub mod auth;
pub mod health;
pub mod history;
