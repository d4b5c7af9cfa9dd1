//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the generative model behind answer synthesis
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a single prompt and return the model's raw text response
    ///
    /// Single attempt, no internal retry. The response is untrusted text; the
    /// synthesizer owns parsing it.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// The model being used
    fn model(&self) -> &str;

    /// Provider name for logging
    fn name(&self) -> &str;
}
