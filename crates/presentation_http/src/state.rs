//! Shared handler state

use std::sync::Arc;

use application::{AccountService, AnalysisService};

/// Services every handler can reach, cloned per request
#[derive(Clone)]
pub struct AppState {
    /// Analysis service running the sentiment pipeline
    pub analysis_service: Arc<AnalysisService>,
    /// Account service for registration and login
    pub account_service: Arc<AccountService>,
}
