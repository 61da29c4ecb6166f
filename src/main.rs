//! Achtung Core - Privacy Risk Gateway
//!
//! Classifies short user texts for privacy risk before they are shared
//! publicly, explains the risk, suggests remediation and offers guided
//! rewriting.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::{LlmRewriter, PrivacyAnalyzer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The classification pipeline.
    pub analyzer: Arc<PrivacyAnalyzer>,
    /// Rewrite collaborator.
    pub rewriter: Arc<LlmRewriter>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Achtung Core v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        keywords = config.privacy.keywords.len(),
        tips = config.privacy.tips.len(),
        "Configuration loaded"
    );

    let analyzer = Arc::new(PrivacyAnalyzer::from_config(&config.privacy));

    if config.llm.is_usable() {
        tracing::info!(
            model = %config.llm.model,
            base_url = %config.llm.base_url,
            "Guided rewriting enabled"
        );
    } else if config.llm.enabled {
        tracing::warn!("Guided rewriting enabled but no API key set - rewrite requests will fail");
    } else {
        tracing::info!("Guided rewriting disabled");
    }

    let rewriter = Arc::new(LlmRewriter::new(config.llm.clone()).map_err(|e| {
        tracing::error!(error = %e, "Failed to build rewrite client");
        anyhow::anyhow!("Rewrite client error: {}", e)
    })?);

    let state = AppState { analyzer, rewriter };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
