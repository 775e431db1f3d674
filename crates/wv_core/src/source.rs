use crate::types::ArticlePage;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Returns the name of the knowledge base
    fn name(&self) -> &str;

    /// Fetch the full plain-text article for an exact title
    async fn fetch_page(&self, title: &str) -> Result<ArticlePage>;

    /// Free-text search returning ranked candidate titles
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}
