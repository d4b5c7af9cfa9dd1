//! Prompt templates for answer synthesis

use crate::types::Chunk;

/// Prompt builder for structured document Q&A
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved chunk texts into the context block, in rank order.
    /// Chunk texts already carry their page markers.
    pub fn build_context(chunks: &[&Chunk]) -> String {
        chunks
            .iter()
            .map(|chunk| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the synthesis prompt with the strict JSON response contract.
    pub fn build_answer_prompt(question: &str, chunks: &[&Chunk]) -> String {
        format!(
            r#"You are an AI assistant for reading insurance policy documents.
Given the following context from a document and a question, extract the answer and specify:
- The most relevant clause (quote the exact text)
- The section (inferred from content if not stated)
- The page number if it appears in the context
- A brief rationale for why this clause was chosen

Context:
{context}

Question: {question}

Respond with a single JSON object containing exactly these fields and no other text:
{{
  "answer": "...",
  "clause": "...",
  "section": "...",
  "page": 5,
  "rationale": "..."
}}"#,
            context = Self::build_context(chunks),
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_question_and_context() {
        let chunks = vec![
            Chunk::from_page(1, "The grace period is 30 days.").unwrap(),
            Chunk::from_page(4, "Claims must be filed within 90 days.").unwrap(),
        ];
        let refs: Vec<&Chunk> = chunks.iter().collect();
        let prompt = PromptBuilder::build_answer_prompt("What is the grace period?", &refs);

        assert!(prompt.contains("Question: What is the grace period?"));
        assert!(prompt.contains("Page 1: The grace period is 30 days."));
        assert!(prompt.contains("Page 4: Claims must be filed within 90 days."));
        assert!(prompt.contains("\"rationale\""));
    }
}
