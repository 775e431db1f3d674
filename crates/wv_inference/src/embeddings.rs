use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use wv_core::{Embedder, Error, Result};

/// Wraps an [`Embedder`] with timing and the chunk/vector pairing check.
pub struct EmbeddingGenerator {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingGenerator {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    pub fn backend_name(&self) -> &str {
        self.embedder.name()
    }

    /// Embed a batch of chunks, one vector per chunk, in chunk order.
    ///
    /// An empty batch returns immediately without touching the model. A
    /// backend that returns a different number of vectors than it was given
    /// chunks is an inference error.
    pub async fn embed_chunks(&self, chunks: &[String]) -> Result<Vec<Vec<f32>>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let embeddings = self.embedder.embed_batch(chunks).await?;

        if embeddings.len() != chunks.len() {
            return Err(Error::Inference(format!(
                "Embedder returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        info!(
            "✅ Embedding complete in {:.2}s ({} chunks, {})",
            start.elapsed().as_secs_f64(),
            chunks.len(),
            self.embedder.name()
        );
        Ok(embeddings)
    }
}
