//! Answer synthesis: prompt construction, model call, and strict parsing

pub mod parse;
pub mod prompt;

pub use parse::parse_structured_answer;
pub use prompt::PromptBuilder;

use std::sync::Arc;

use crate::error::Result;
use crate::providers::LlmProvider;
use crate::types::{Chunk, StructuredAnswer};

/// Sends retrieved context and a question to the generative model and parses
/// the result into a structured answer
pub struct Synthesizer {
    llm: Arc<dyn LlmProvider>,
}

impl Synthesizer {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Ask the model and parse its response.
    ///
    /// Transport failures propagate as `Error::Generation` for the
    /// orchestrator to downgrade; a malformed response never errors and
    /// parses to the sentinel instead.
    pub async fn synthesize(
        &self,
        question: &str,
        context: &[&Chunk],
    ) -> Result<StructuredAnswer> {
        let prompt = PromptBuilder::build_answer_prompt(question, context);
        let raw = self.llm.complete(&prompt).await?;

        tracing::debug!(
            model = self.llm.model(),
            response_bytes = raw.len(),
            "model responded"
        );

        Ok(parse_structured_answer(&raw))
    }
}
