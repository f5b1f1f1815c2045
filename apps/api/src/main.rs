mod config;
mod critique;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::critique::randomness::ThreadRandom;
use crate::critique::service::CritiqueService;
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roaster API v{}", env!("CARGO_PKG_VERSION"));

    // Only build the Groq client when a usable key is present
    let provider: Option<Arc<dyn CompletionProvider>> = match config.credential() {
        Some(key) => {
            let llm = LlmClient::new(key.to_string()).context("Failed to build Groq client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm))
        }
        None => {
            warn!("GROQ_API_KEY not configured; serving canned demo critiques");
            None
        }
    };

    let critique = Arc::new(CritiqueService::new(provider, Arc::new(ThreadRandom)));

    let state = AppState {
        config: config.clone(),
        critique,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
