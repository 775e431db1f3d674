use std::sync::Arc;
use tracing::{debug, info, warn};
use wv_core::{
    chunk_text, ArticlePage, ArticleSource, Embedder, Error, PersistStatus, PreparedDocument,
    RawTextStore, Result,
};
use wv_inference::EmbeddingGenerator;

/// The fetch → persist → chunk → embed pipeline for one topic at a time.
///
/// All collaborators are injected, so tests can substitute any of them.
/// Fetch and persistence problems degrade gracefully (empty document,
/// `PersistStatus::Failed`); embedding problems propagate as errors.
pub struct Preparer {
    source: Arc<dyn ArticleSource>,
    store: Arc<dyn RawTextStore>,
    generator: EmbeddingGenerator,
}

impl Preparer {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        store: Arc<dyn RawTextStore>,
        embedder: Arc<dyn Embedder>,
    ) -> Self {
        Self {
            source,
            store,
            generator: EmbeddingGenerator::new(embedder),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Ranked title candidates from the underlying source.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        self.source.search(query).await
    }

    /// Run the whole pipeline for a topic.
    ///
    /// A topic that cannot be resolved (direct lookup and search fallback
    /// both fail) yields `Ok` with an empty document; no error escapes for
    /// fetch problems. A failed save is recorded on the document and does
    /// not stop chunking or embedding.
    pub async fn prepare(&self, topic: &str, chunk_size: usize) -> Result<PreparedDocument> {
        if chunk_size == 0 {
            return Err(Error::Chunking("Chunk size must be at least 1".to_string()));
        }

        info!("📚 Fetching data for: {}", topic);
        let page = match self.resolve(topic).await {
            Ok(page) => page,
            Err(e) => {
                info!("❌ {} fetch failed: {}", self.source.name(), e);
                return Ok(PreparedDocument::empty(topic));
            }
        };

        let persistence = match self.store.save(topic, &page.content).await {
            Ok(path) => {
                info!("💾 Saved raw content to {}", path.display());
                PersistStatus::Saved(path)
            }
            Err(e) => {
                warn!("⚠️ Failed to save content: {}", e);
                PersistStatus::Failed(e.to_string())
            }
        };

        let chunks = chunk_text(&page.content, chunk_size);
        info!(
            "🧠 Chunked into {} parts of ~{} chars",
            chunks.len(),
            chunk_size
        );

        let embeddings = self.generator.embed_chunks(&chunks).await?;

        Ok(PreparedDocument {
            topic: topic.to_string(),
            resolved_title: Some(page.title),
            chunks,
            embeddings,
            persistence,
        })
    }

    /// Direct title lookup, then search-and-retry on the first hit.
    async fn resolve(&self, topic: &str) -> Result<ArticlePage> {
        match self.source.fetch_page(topic).await {
            Ok(page) => Ok(page),
            Err(direct_err) => {
                debug!(
                    "Direct lookup for '{}' failed ({}), trying search",
                    topic, direct_err
                );
                let hits = self.source.search(topic).await?;
                let title = hits
                    .first()
                    .ok_or_else(|| Error::Fetch(format!("No search results for '{}'", topic)))?;
                info!("🔎 '{}' resolved via search to '{}'", topic, title);
                self.source.fetch_page(title).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::path::PathBuf;
    use wv_inference::models::HashEmbedder;
    use wv_storage::MemoryStore;

    fn page(title: &str, content: &str) -> ArticlePage {
        ArticlePage {
            title: title.to_string(),
            content: content.to_string(),
            url: format!("https://example.org/wiki/{}", title),
            source: "mock".to_string(),
            fetched_at: Utc::now(),
        }
    }

    /// Resolves every title directly.
    struct DirectSource {
        content: String,
    }

    #[async_trait]
    impl ArticleSource for DirectSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_page(&self, title: &str) -> Result<ArticlePage> {
            Ok(page(title, &self.content))
        }

        async fn search(&self, _query: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    /// Fails direct lookups except for one canonical title, which search
    /// returns as its first hit.
    struct FallbackOnlySource {
        canonical: &'static str,
        content: &'static str,
    }

    #[async_trait]
    impl ArticleSource for FallbackOnlySource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_page(&self, title: &str) -> Result<ArticlePage> {
            if title == self.canonical {
                Ok(page(title, self.content))
            } else {
                Err(Error::Fetch(format!("Page not found: '{}'", title)))
            }
        }

        async fn search(&self, _query: &str) -> Result<Vec<String>> {
            Ok(vec![self.canonical.to_string(), "Decoy".to_string()])
        }
    }

    /// Never resolves anything.
    struct DeadSource;

    #[async_trait]
    impl ArticleSource for DeadSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_page(&self, title: &str) -> Result<ArticlePage> {
            Err(Error::Fetch(format!("Page not found: '{}'", title)))
        }

        async fn search(&self, _query: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[derive(Debug)]
    struct FailingStore;

    #[async_trait]
    impl RawTextStore for FailingStore {
        async fn save(&self, _topic: &str, _text: &str) -> Result<PathBuf> {
            Err(Error::Storage("disk full".to_string()))
        }
    }

    fn preparer_with(source: Arc<dyn ArticleSource>, store: Arc<dyn RawTextStore>) -> Preparer {
        Preparer::new(source, store, Arc::new(HashEmbedder::new()))
    }

    #[tokio::test]
    async fn test_direct_lookup_happy_path() {
        let source = Arc::new(DirectSource {
            content: "HelloWorld".to_string(),
        });
        let store = Arc::new(MemoryStore::new());
        let preparer = preparer_with(source, store.clone());

        let doc = preparer.prepare("Test", 5).await.unwrap();
        assert_eq!(doc.chunks, vec!["Hello", "World"]);
        assert_eq!(doc.embeddings.len(), 2);
        assert_eq!(doc.resolved_title.as_deref(), Some("Test"));
        assert!(doc.persistence.is_saved());
        assert_eq!(store.get("Test").await.as_deref(), Some("HelloWorld"));
    }

    #[tokio::test]
    async fn test_chunks_and_embeddings_stay_paired() {
        let source = Arc::new(DirectSource {
            content: "a".repeat(3500),
        });
        let preparer = preparer_with(source, Arc::new(MemoryStore::new()));

        let doc = preparer.prepare("Long article", 1000).await.unwrap();
        assert_eq!(doc.chunks.len(), 4);
        assert_eq!(doc.chunks.len(), doc.embeddings.len());
        assert_eq!(doc.chunks.concat().len(), 3500);
    }

    #[tokio::test]
    async fn test_fallback_saves_resolved_article_under_query_topic() {
        let source = Arc::new(FallbackOnlySource {
            canonical: "Rust (programming language)",
            content: "Rust is a systems language.",
        });
        let store = Arc::new(MemoryStore::new());
        let preparer = preparer_with(source, store.clone());

        let doc = preparer.prepare("rust lang", 1000).await.unwrap();
        assert_eq!(
            doc.resolved_title.as_deref(),
            Some("Rust (programming language)")
        );
        // File is keyed by the query topic, content is the fallback article's.
        assert_eq!(
            store.get("rust lang").await.as_deref(),
            Some("Rust is a systems language.")
        );
        assert_eq!(doc.chunks.len(), doc.embeddings.len());
    }

    #[tokio::test]
    async fn test_double_failure_returns_empty_document() {
        let store = Arc::new(MemoryStore::new());
        let preparer = preparer_with(Arc::new(DeadSource), store.clone());

        let doc = preparer.prepare("No such topic", 1000).await.unwrap();
        assert!(doc.is_empty());
        assert!(doc.embeddings.is_empty());
        assert_eq!(doc.resolved_title, None);
        assert_eq!(doc.persistence, PersistStatus::Skipped);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_failure_is_recorded_not_fatal() {
        let source = Arc::new(DirectSource {
            content: "persist me".to_string(),
        });
        let preparer = preparer_with(source, Arc::new(FailingStore));

        let doc = preparer.prepare("Topic", 1000).await.unwrap();
        assert!(matches!(doc.persistence, PersistStatus::Failed(_)));
        // Chunking and embedding still ran on the in-memory text.
        assert_eq!(doc.chunks, vec!["persist me"]);
        assert_eq!(doc.embeddings.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_article_yields_no_chunks_but_saves() {
        let source = Arc::new(DirectSource {
            content: String::new(),
        });
        let store = Arc::new(MemoryStore::new());
        let preparer = preparer_with(source, store.clone());

        let doc = preparer.prepare("Blank", 1000).await.unwrap();
        assert!(doc.chunks.is_empty());
        assert!(doc.embeddings.is_empty());
        assert!(doc.persistence.is_saved());
        assert_eq!(store.get("Blank").await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_zero_chunk_size_rejected() {
        let source = Arc::new(DirectSource {
            content: "text".to_string(),
        });
        let preparer = preparer_with(source, Arc::new(MemoryStore::new()));

        let err = preparer.prepare("Topic", 0).await.unwrap_err();
        assert!(matches!(err, Error::Chunking(_)));
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical() {
        let source = Arc::new(DirectSource {
            content: "Determinism is a virtue in data preparation.".to_string(),
        });
        let preparer = preparer_with(source, Arc::new(MemoryStore::new()));

        let first = preparer.prepare("Determinism", 10).await.unwrap();
        let second = preparer.prepare("Determinism", 10).await.unwrap();
        assert_eq!(first.chunks, second.chunks);
        // HashEmbedder is deterministic, so vectors match too.
        assert_eq!(first.embeddings, second.embeddings);
    }

    #[tokio::test]
    async fn test_embedder_error_propagates() {
        #[derive(Debug)]
        struct FailingEmbedder;

        #[async_trait]
        impl Embedder for FailingEmbedder {
            fn name(&self) -> &str {
                "failing"
            }

            async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
                Err(Error::Inference("model unavailable".to_string()))
            }
        }

        let source = Arc::new(DirectSource {
            content: "text".to_string(),
        });
        let preparer = Preparer::new(
            source,
            Arc::new(MemoryStore::new()),
            Arc::new(FailingEmbedder),
        );

        let err = preparer.prepare("Topic", 1000).await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}
