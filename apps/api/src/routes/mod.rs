pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Advisory API
        .route("/api/v1/advice", post(handlers::handle_get_advice))
        .route("/api/v1/advice/history", get(handlers::handle_history))
        .route("/api/v1/advisors", get(handlers::handle_advisors))
        .route("/api/v1/categories", get(handlers::handle_categories))
        .with_state(state)
}
