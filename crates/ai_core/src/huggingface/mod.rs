//! Hugging Face-compatible classifier client
//!
//! Works against any server exposing the text-classification inference
//! route (`POST /models/{model}`), the hosted Inference API included.

mod client;

pub use client::HfClassifierEngine;
