//! Nearest-neighbor retrieval over a single document's chunks

pub mod index;

pub use index::{FlatIndex, ScoredHit};

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::Chunk;

/// A document's chunks paired with the index over their embeddings
///
/// Invariant: `chunks.len() == index.len()` and `vectors[i]` embeds
/// `chunks[i]`. Built once per uploaded document, scoped to one request, and
/// never mutated after build — concurrent question workers read it freely.
#[derive(Debug)]
pub struct DocumentIndex {
    chunks: Vec<Chunk>,
    index: FlatIndex,
}

impl DocumentIndex {
    /// Pair chunks with their embedding vectors and build the index.
    pub fn build(chunks: Vec<Chunk>, vectors: Vec<Vec<f32>>) -> Result<Self> {
        if chunks.len() != vectors.len() {
            return Err(Error::Internal(format!(
                "chunk/vector count mismatch: {} chunks, {} vectors",
                chunks.len(),
                vectors.len()
            )));
        }

        Ok(Self {
            chunks,
            index: FlatIndex::build(vectors)?,
        })
    }

    /// Index over no content; every search fails with `Error::EmptyIndex`.
    pub fn empty() -> Self {
        Self {
            chunks: Vec::new(),
            index: FlatIndex::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Top-k search over the chunk embeddings
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredHit>> {
        self.index.search(query, k)
    }
}

/// Embeds a question and fetches the k most relevant chunks for it
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    top_k: usize,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, top_k: usize) -> Self {
        Self { embedder, top_k }
    }

    /// Return the chunks most relevant to `question`, in rank order.
    ///
    /// Propagates `Error::EmptyIndex` (and embedding failures for the
    /// question itself) so the orchestrator can degrade this question alone.
    pub async fn retrieve<'a>(
        &self,
        question: &str,
        index: &'a DocumentIndex,
    ) -> Result<Vec<&'a Chunk>> {
        // Check before spending an embedding call on a question that cannot
        // be answered.
        if index.is_empty() {
            return Err(Error::EmptyIndex);
        }

        let query = self.embedder.embed(question).await?;
        let hits = index.search(&query, self.top_k)?;

        tracing::debug!(
            question,
            hits = hits.len(),
            best_distance = hits.first().map(|h| h.distance),
            "retrieved context chunks"
        );

        Ok(hits.iter().filter_map(|hit| index.chunk(hit.index)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_misaligned_inputs() {
        let chunks = vec![Chunk::from_page(1, "text").unwrap()];
        let err = DocumentIndex::build(chunks, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn empty_document_index_fails_search() {
        let index = DocumentIndex::empty();
        assert!(index.is_empty());
        let err = index.search(&[1.0], 3).unwrap_err();
        assert!(matches!(err, Error::EmptyIndex));
    }
}
