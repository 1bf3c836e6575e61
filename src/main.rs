//! Summarizer Service - Main Entry Point
//!
//! Serves chunked document summarization over HTTP.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use summarizer::api::{self, handlers::AppState};
use summarizer::jobs::SummaryPipeline;
use summarizer::summarizers::shared_summarizer;
use summarizer::types::SummarizerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "summarizer=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = SummarizerConfig::from_env();

    info!("Starting Summarizer Service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        chunk_words = config.chunk_words,
        max_length = config.max_length,
        min_length = config.min_length,
        tail_policy = %config.tail_policy,
        finish_policy = %config.finish_policy,
        "Summarization settings"
    );

    // Initialize components
    let summarizer = shared_summarizer(&config)?;
    if !summarizer.health_check().await {
        tracing::warn!(endpoint = summarizer.endpoint(), "Summarization model endpoint is not reachable yet");
    }

    let pipeline = SummaryPipeline::new(summarizer, config);
    let state = Arc::new(AppState::new(pipeline));
    let app = api::router(state);

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3019);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
