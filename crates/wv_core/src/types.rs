use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A resolved encyclopedia article: plain-text content plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlePage {
    pub title: String,
    pub content: String,
    pub url: String,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

/// Outcome of the best-effort raw-text save.
///
/// `Failed` carries the reason so callers can detect the degraded
/// "embeddings computed but nothing persisted" case programmatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PersistStatus {
    Saved(PathBuf),
    Failed(String),
    Skipped,
}

impl PersistStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistStatus::Saved(_))
    }
}

/// Result of one prepare run for a topic.
///
/// `chunks` and `embeddings` are index-paired: `embeddings[i]` is the vector
/// for `chunks[i]`, and the two are always the same length. A topic that
/// could not be resolved yields empty vectors and `PersistStatus::Skipped`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedDocument {
    pub topic: String,
    pub resolved_title: Option<String>,
    pub chunks: Vec<String>,
    pub embeddings: Vec<Vec<f32>>,
    pub persistence: PersistStatus,
}

impl PreparedDocument {
    /// The empty result for a topic that resolved to nothing.
    pub fn empty(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            resolved_title: None,
            chunks: Vec::new(),
            embeddings: Vec::new(),
            persistence: PersistStatus::Skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
