use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use url::Url;
use wv_core::{Embedder, Error, Result};

const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

#[derive(Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// Client for an OpenAI-style `POST {base}/embeddings` endpoint.
pub struct RemoteEmbedder {
    client: Arc<Client>,
    base_url: Url,
    model: String,
    api_key: Option<String>,
}

impl RemoteEmbedder {
    pub fn new(base_url: String, model: Option<String>, api_key: Option<String>) -> Result<Self> {
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::Inference(format!("Invalid embedder base URL: {}", e)))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            base_url,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.base_url.as_str().trim_end_matches('/'))
    }
}

impl fmt::Debug for RemoteEmbedder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteEmbedder")
            .field("base_url", &self.base_url.as_str())
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl Embedder for RemoteEmbedder {
    fn name(&self) -> &str {
        "remote"
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            input: texts.to_vec(),
            model: self.model.clone(),
        };

        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder
            .send()
            .await?
            .error_for_status()?
            .json::<EmbeddingResponse>()
            .await?;

        if response.data.len() != texts.len() {
            return Err(Error::Inference(format!(
                "Embedding count mismatch: sent {} texts, got {} vectors",
                texts.len(),
                response.data.len()
            )));
        }

        // The API may return items out of order; restore input order.
        let mut data = response.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}
