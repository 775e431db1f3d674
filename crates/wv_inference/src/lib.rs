pub mod embeddings;
pub mod models;

pub use embeddings::EmbeddingGenerator;
pub use models::create_embedder;

/// Configuration for the embedding backend.
///
/// With a `base_url` set, embeddings come from a remote OpenAI-style
/// `/embeddings` endpoint; without one, the deterministic offline hash
/// backend is used.
#[derive(Debug, Clone, Default)]
pub struct EmbedderConfig {
    pub backend: Option<String>,
    pub base_url: Option<String>,
    pub model_name: Option<String>,
    pub api_key: Option<String>,
}

pub mod prelude {
    pub use super::models::create_embedder;
    pub use super::{EmbedderConfig, EmbeddingGenerator};
    pub use wv_core::{Embedder, Error, Result};
}
