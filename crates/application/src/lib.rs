//! Use cases for Sentimeter
//!
//! The text pipeline, the analysis and account services, and the port
//! traits the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;
pub mod text;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use text::{normalize, segment};
