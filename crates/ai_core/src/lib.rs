//! AI Core - Star-rating classifier client
//!
//! Talks to a Hugging Face-compatible text-classification server that
//! grades a sentence 1-5 stars (the nlptown multilingual sentiment model
//! by default). The rest of the system depends on it only through the
//! `ClassifierEngine` port.

pub mod config;
pub mod error;
pub mod huggingface;
pub mod ports;

pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use huggingface::HfClassifierEngine;
pub use ports::{Classification, ClassifierEngine};
