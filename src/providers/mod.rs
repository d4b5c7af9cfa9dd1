//! Provider abstractions for the embedding and generation services
//!
//! Trait-based seams so the pipeline can run against the real
//! OpenAI-compatible API in production and deterministic mocks in tests.

pub mod embedding;
pub mod llm;
pub mod openai;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use openai::OpenAiClient;
