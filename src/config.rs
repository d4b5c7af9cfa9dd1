//! Configuration for the RAG system

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main RAG system configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Embedding and generation service configuration
    #[serde(default)]
    pub llm: LlmConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl RagConfig {
    /// Load configuration from a TOML file, falling back to defaults when no
    /// path is given. Environment overrides are applied either way.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("failed to read {}: {}", path.display(), e))
                })?;
                toml::from_str(&raw)
                    .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Secrets come from the environment so they stay out of config files.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                self.llm.api_key = key;
            }
        }
        if let Ok(token) = std::env::var("POLICY_RAG_AUTH_TOKEN") {
            if !token.is_empty() {
                self.server.auth_token = Some(token);
            }
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
    /// Bearer token required on API routes; unauthenticated when unset
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            max_upload_size: 50 * 1024 * 1024,
            auth_token: None,
        }
    }
}

/// Embedding and generation service configuration (OpenAI-compatible API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Service base URL
    pub base_url: String,
    /// API key (overridden by OPENAI_API_KEY)
    #[serde(default)]
    pub api_key: String,
    /// Embedding model name
    pub embedding_model: String,
    /// Generation model name
    pub generation_model: String,
    /// Temperature for generation (low for determinism bias)
    pub temperature: f32,
    /// Per-request timeout in seconds; a timeout surfaces as the
    /// corresponding service error
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            embedding_model: "text-embedding-ada-002".to_string(),
            generation_model: "gpt-4".to_string(),
            temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per question
    pub top_k: usize,
    /// Maximum questions answered in parallel
    pub max_concurrency: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_concurrency: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design() {
        let config = RagConfig::default();
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.llm.temperature, 0.2);
        assert!(config.server.auth_token.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RagConfig = toml::from_str(
            r#"
            [llm]
            base_url = "http://localhost:11434"
            embedding_model = "nomic-embed-text"
            generation_model = "phi3"
            temperature = 0.2
            timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.server.port, 8080);
    }
}
