mod assistant;
mod config;
mod dataset;
mod errors;
mod llm_client;
mod models;
mod routes;
mod search;
mod state;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dataset::JobDataset;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::ranker::JaccardScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobAid API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone());
    info!(
        "LLM client initialized (default model: {})",
        llm_client::DEFAULT_MODEL
    );

    // Build app state
    let state = AppState {
        dataset: Arc::new(RwLock::new(None)),
        sessions: Arc::new(RwLock::new(HashMap::new())),
        llm,
        config: config.clone(),
        scorer: Arc::new(JaccardScorer),
    };

    // Warm start when the configured CSV already exists; the load endpoint
    // can (re)load later either way.
    match dataset::loader::load_from_path(Path::new(&config.dataset_path)) {
        Ok(records) => {
            let snapshot = state
                .install_dataset(JobDataset::new(records, &config.dataset_path))
                .await;
            info!(
                "Dataset loaded at startup: {} jobs from {}",
                snapshot.len(),
                config.dataset_path
            );
        }
        Err(e) => warn!("Dataset not loaded at startup ({e}); waiting for an explicit load"),
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
