use async_trait::async_trait;
use std::path::{Path, PathBuf};
use wv_core::{sanitize_topic, RawTextStore, Result};

/// Writes raw article text as UTF-8 `.txt` files under an output directory.
///
/// The directory is created when the store is constructed. Saving the same
/// topic twice overwrites the previous file.
#[derive(Debug)]
pub struct FsStore {
    dir: PathBuf,
}

impl FsStore {
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path a topic would be saved to.
    pub fn path_for(&self, topic: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", sanitize_topic(topic)))
    }
}

#[async_trait]
impl RawTextStore for FsStore {
    async fn save(&self, topic: &str, text: &str) -> Result<PathBuf> {
        let path = self.path_for(topic);
        tokio::fs::write(&path, text).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_writes_exact_bytes() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path()).unwrap();

        let path = store.save("Rust", "fearless concurrency").await.unwrap();
        assert_eq!(path, tmp.path().join("Rust.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "fearless concurrency");
    }

    #[tokio::test]
    async fn test_save_sanitizes_topic() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path()).unwrap();

        let path = store.save("TCP/IP model", "layers").await.unwrap();
        assert_eq!(path, tmp.path().join("TCP_IP_model.txt"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_content() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path()).unwrap();

        store.save("Rust", "first").await.unwrap();
        let path = store.save("Rust", "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

        // Exactly one file for the topic.
        let count = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("out").join("raw");
        let store = FsStore::new(&nested).unwrap();
        assert!(nested.is_dir());

        store.save("topic", "text").await.unwrap();
        assert!(nested.join("topic.txt").exists());
    }

    #[tokio::test]
    async fn test_save_into_unwritable_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path()).unwrap();
        // Remove the directory out from under the store to force an IO error.
        drop(tmp);
        assert!(store.save("Rust", "text").await.is_err());
    }
}
