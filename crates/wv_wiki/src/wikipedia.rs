use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use url::Url;
use wv_core::{ArticlePage, ArticleSource, Error, Result};

/// MediaWiki Action API endpoint for English Wikipedia.
pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

const SEARCH_LIMIT: &str = "5";

#[derive(Deserialize)]
struct ApiResponse {
    query: Option<QueryBody>,
}

#[derive(Deserialize, Default)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<PageBody>,
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct PageBody {
    title: String,
    #[serde(default)]
    missing: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
}

#[derive(Deserialize)]
struct PageProps {
    // Present (with an empty value) on disambiguation pages.
    disambiguation: Option<String>,
}

#[derive(Deserialize)]
struct SearchHit {
    title: String,
}

/// Article source backed by the MediaWiki Action API.
///
/// `fetch_page` resolves redirects and returns the plain-text extract;
/// missing titles and disambiguation pages are both fetch errors, so the
/// caller's search fallback covers them. `search` returns ranked titles.
pub struct WikipediaSource {
    client: Client,
    api_url: Url,
}

impl WikipediaSource {
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| Error::Fetch(format!("Invalid API URL '{}': {}", api_url, e)))?;
        Ok(Self {
            client: Client::new(),
            api_url,
        })
    }

    /// Canonical article URL for a title, derived from the API host.
    fn page_url(&self, title: &str) -> String {
        let mut url = self.api_url.clone();
        url.set_path(&format!("/wiki/{}", title.replace(' ', "_")));
        url.set_query(None);
        url.to_string()
    }
}

#[async_trait]
impl ArticleSource for WikipediaSource {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn fetch_page(&self, title: &str) -> Result<ArticlePage> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await?;

        let page = response
            .query
            .unwrap_or_default()
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| Error::Fetch(format!("No query result for '{}'", title)))?;

        if page.missing {
            return Err(Error::Fetch(format!("Page not found: '{}'", title)));
        }
        if page
            .pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
        {
            return Err(Error::Fetch(format!("Title is ambiguous: '{}'", title)));
        }

        let content = page
            .extract
            .ok_or_else(|| Error::Fetch(format!("No extract returned for '{}'", title)))?;

        Ok(ArticlePage {
            url: self.page_url(&page.title),
            title: page.title,
            content,
            source: self.name().to_string(),
            fetched_at: Utc::now(),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("list", "search"),
                ("srlimit", SEARCH_LIMIT),
                ("srsearch", query),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ApiResponse>()
            .await?;

        Ok(response
            .query
            .unwrap_or_default()
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect())
    }
}
