//! RAG server binary
//!
//! Run with: cargo run --bin policy-rag-server [config.toml]

use std::path::Path;

use policy_rag::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args().nth(1);
    let config = RagConfig::load(config_path.as_deref().map(Path::new))?;

    tracing::info!("configuration loaded");
    tracing::info!("  - embedding model: {}", config.llm.embedding_model);
    tracing::info!("  - generation model: {}", config.llm.generation_model);
    tracing::info!("  - top_k: {}", config.retrieval.top_k);
    tracing::info!("  - request timeout: {}s", config.llm.timeout_secs);

    if config.llm.api_key.is_empty() {
        tracing::warn!("no API key configured; set OPENAI_API_KEY");
    }
    if config.server.auth_token.is_none() {
        tracing::warn!("no auth token configured; API is open (set POLICY_RAG_AUTH_TOKEN)");
    }

    let server = RagServer::new(config)?;
    tracing::info!("listening on http://{}", server.address());
    tracing::info!("  POST /api/v1/run - answer questions against an uploaded document");
    tracing::info!("  GET  /health     - health check");

    server.start().await?;

    Ok(())
}
