pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        // Posts API
        .route("/api/v1/posts/options", get(handlers::handle_options))
        .route("/api/v1/posts/generate", post(handlers::handle_generate))
        .with_state(state)
}
