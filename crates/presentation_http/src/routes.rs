//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route(
            "/weather",
            get(handlers::weather::get_weather).post(handlers::weather::post_weather),
        )
        // Attach state
        .with_state(state)
}
