use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Embedder: Send + Sync + std::fmt::Debug {
    /// Returns the name of the embedding backend
    fn name(&self) -> &str;

    /// Embed a batch of texts, one vector per input, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
