//! HTTP API for the summarizer service.

pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Build the HTTP routes around shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.pipeline.config().max_upload_bytes;

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Summarization
        .route("/summarize", post(handlers::summarize_text))
        .route("/summarize/upload", post(handlers::summarize_upload))
        // Results
        .route("/summaries/:id", get(handlers::get_summary))
        .route("/summaries/:id/download", get(handlers::download_summary))
        // Settings
        .route("/config", get(handlers::get_config))
        // State
        .with_state(state)
        // Middleware
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
