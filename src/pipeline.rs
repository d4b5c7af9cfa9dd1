//! Pipeline orchestrator: one document, one question list, one answer batch

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::generation::Synthesizer;
use crate::ingestion::extract_chunks;
use crate::providers::{EmbeddingProvider, LlmProvider};
use crate::retrieval::{DocumentIndex, Retriever};
use crate::types::{AnswerBatch, Chunk, StructuredAnswer};

/// Composes extraction, embedding, indexing, retrieval, and synthesis
///
/// Each `run` builds its own `DocumentIndex`; nothing is shared across
/// requests. This is the only layer allowed to catch a per-question failure
/// and downgrade it to the sentinel answer — document-level failures abort
/// the whole batch instead.
pub struct Pipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    retriever: Retriever,
    synthesizer: Synthesizer,
    max_concurrency: usize,
}

impl Pipeline {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        retrieval: &RetrievalConfig,
    ) -> Self {
        Self {
            retriever: Retriever::new(Arc::clone(&embedder), retrieval.top_k),
            synthesizer: Synthesizer::new(llm),
            embedder,
            max_concurrency: retrieval.max_concurrency.max(1),
        }
    }

    /// Answer every question against the uploaded document.
    ///
    /// The output always has one answer per question, in input order, even
    /// when individual questions degrade to the sentinel. Extraction and
    /// index-build embedding failures abort the batch with a single error.
    pub async fn run(&self, document: &[u8], questions: &[String]) -> Result<AnswerBatch> {
        let chunks = extract_chunks(document)?;
        tracing::info!(
            chunks = chunks.len(),
            questions = questions.len(),
            "running pipeline"
        );

        let index = self.build_index(chunks).await?;
        Ok(self.answer_all(&index, questions).await)
    }

    /// Embed all chunk texts in one batch and build the per-request index.
    ///
    /// An empty chunk list builds an empty index rather than failing: the
    /// batch still completes, with every question degrading individually.
    pub async fn build_index(&self, chunks: Vec<Chunk>) -> Result<DocumentIndex> {
        if chunks.is_empty() {
            tracing::warn!("document yielded no extractable text");
            return Ok(DocumentIndex::empty());
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = self.embedder.embed_batch(&texts).await?;

        DocumentIndex::build(chunks, vectors)
    }

    /// Answer all questions against a built index, bounded-parallel and
    /// order-preserving. Dropping the returned future stops issuing further
    /// per-question work.
    pub async fn answer_all(&self, index: &DocumentIndex, questions: &[String]) -> AnswerBatch {
        stream::iter(questions)
            .map(|question| self.answer_one(index, question))
            .buffered(self.max_concurrency)
            .boxed()
            .collect()
            .await
    }

    async fn answer_one(&self, index: &DocumentIndex, question: &str) -> StructuredAnswer {
        match self.try_answer(index, question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(question, error = %e, "degrading question to sentinel answer");
                StructuredAnswer::sentinel()
            }
        }
    }

    async fn try_answer(&self, index: &DocumentIndex, question: &str) -> Result<StructuredAnswer> {
        let context = self.retriever.retrieve(question, index).await?;
        self.synthesizer.synthesize(question, &context).await
    }
}
