pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route(
            "/api/generate/markdown",
            post(handlers::handle_generate_markdown),
        )
        .route("/api/options", get(handlers::handle_options))
        .with_state(state)
}
