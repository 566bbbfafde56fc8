//! HTTP route table

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Build the full route table and attach shared state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .nest("/v1", v1_routes())
        .with_state(state)
}

/// Versioned API surface: accounts, analysis, history
fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/analyze/deferred", post(handlers::analyze::analyze_deferred))
        .route("/history/{username}", get(handlers::history::get_history))
}
