use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use wv_core::{sanitize_topic, RawTextStore, Result};

/// In-memory store for tests and dry runs. Saves are kept in a map keyed by
/// the sanitized topic; the returned path is synthetic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, topic: &str) -> Option<String> {
        self.saved.read().await.get(&sanitize_topic(topic)).cloned()
    }

    pub async fn len(&self) -> usize {
        self.saved.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.saved.read().await.is_empty()
    }
}

#[async_trait]
impl RawTextStore for MemoryStore {
    async fn save(&self, topic: &str, text: &str) -> Result<PathBuf> {
        let stem = sanitize_topic(topic);
        let mut saved = self.saved.write().await;
        saved.insert(stem.clone(), text.to_string());
        Ok(PathBuf::from(format!("memory://{}.txt", stem)))
    }
}
