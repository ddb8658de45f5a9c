// Main entry point for the fact-check API server

mod app;
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use factcheck::ai::GroqModel;
use factcheck::{DuckDuckGo, FactChecker, GdeltClient};
use groq_client::GroqClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::build_app;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,factcheck=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fact-check API server");

    // Load configuration; a missing credential is fatal before any
    // network call is attempted.
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Wire up the pipeline collaborators
    let model = GroqModel::new(GroqClient::new(config.groq_api_key.clone()));
    let pipeline = Arc::new(FactChecker::new(model, GdeltClient::new(), DuckDuckGo::new()));

    let app = build_app(pipeline);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
