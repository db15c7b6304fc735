pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::dataset::handlers as dataset;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dataset API
        .route("/api/v1/dataset", get(dataset::handle_dataset_summary))
        .route("/api/v1/dataset/load", post(dataset::handle_load))
        .route("/api/v1/dataset/upload", post(dataset::handle_upload))
        // Jobs API
        .route("/api/v1/jobs", get(dataset::handle_listings))
        .route("/api/v1/jobs/search", post(search::handle_search))
        .route("/api/v1/analytics", get(dataset::handle_analytics))
        // Assistant API
        .route("/api/v1/models", get(assistant::handle_models))
        .route("/api/v1/chat", post(assistant::handle_chat))
        .route(
            "/api/v1/chat/:session_id/history",
            get(assistant::handle_history),
        )
        .route(
            "/api/v1/chat/:session_id/clear",
            post(assistant::handle_clear),
        )
        .with_state(state)
}
