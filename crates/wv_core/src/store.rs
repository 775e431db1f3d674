use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait RawTextStore: Send + Sync + std::fmt::Debug {
    /// Persist the raw article text under the (sanitized) topic name,
    /// overwriting any previous save for the same topic. Returns the
    /// location written.
    async fn save(&self, topic: &str, text: &str) -> Result<PathBuf>;
}

/// Turns a topic into a safe filename stem: spaces and path separators
/// become underscores.
pub fn sanitize_topic(topic: &str) -> String {
    topic
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}
