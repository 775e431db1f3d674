use async_trait::async_trait;
use std::collections::HashMap;
use wv_core::{Embedder, Result};

/// Embedding dimensionality; matches the MiniLM-class sentence models this
/// backend stands in for.
pub const HASH_EMBEDDING_DIM: usize = 384;

/// Deterministic offline embedder built from text length and character
/// frequencies. Not semantically meaningful, but stable across runs, which
/// is what tests and keyless local runs need.
#[derive(Debug, Default, Clone)]
pub struct HashEmbedder;

impl HashEmbedder {
    pub fn new() -> Self {
        Self
    }

    fn embed_one(text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0; HASH_EMBEDDING_DIM];
        if text.is_empty() {
            return embedding;
        }

        let char_count = text.chars().count() as f32;
        embedding[0] = char_count / 1000.0;

        let mut freq: HashMap<char, u32> = HashMap::new();
        for c in text.chars() {
            *freq.entry(c).or_insert(0) += 1;
        }

        // Bucket by codepoint so the layout does not depend on map order.
        for (c, count) in freq {
            let slot = 1 + (c as usize) % (HASH_EMBEDDING_DIM - 1);
            embedding[slot] += count as f32 / char_count;
        }

        embedding
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn name(&self) -> &str {
        "hash"
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| Self::embed_one(t)).collect())
    }
}
