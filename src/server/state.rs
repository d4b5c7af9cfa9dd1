//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::providers::{EmbeddingProvider, LlmProvider, OpenAiClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RagConfig,
    pipeline: Pipeline,
}

impl AppState {
    /// Create application state backed by the OpenAI-compatible client
    pub fn new(config: RagConfig) -> Result<Self> {
        let client = Arc::new(OpenAiClient::new(&config.llm)?);
        tracing::info!(
            embedding_model = %config.llm.embedding_model,
            generation_model = %config.llm.generation_model,
            "service client initialized"
        );

        let pipeline = Pipeline::new(
            Arc::clone(&client) as Arc<dyn EmbeddingProvider>,
            client as Arc<dyn LlmProvider>,
            &config.retrieval,
        );

        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Create state around an existing pipeline (used by tests to inject
    /// mock providers)
    pub fn with_pipeline(config: RagConfig, pipeline: Pipeline) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        }
    }

    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }
}
