//! Application services

mod account_service;
mod analysis_service;
mod sentence_scorer;

pub use account_service::AccountService;
pub use analysis_service::AnalysisService;
pub use sentence_scorer::{SentenceScore, SentenceScorer};
