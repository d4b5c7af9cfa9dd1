//! Embedding provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for mapping text into fixed-dimension embedding vectors
///
/// Calls are single-attempt with no internal retry; the caller decides what a
/// failure means for its batch.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, aligned and order-preserving
    ///
    /// Batching is an optimization only: the result must be equivalent to
    /// per-item calls. The default implementation embeds sequentially.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    /// Provider name for logging
    fn name(&self) -> &str;
}
