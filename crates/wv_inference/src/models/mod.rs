use crate::EmbedderConfig;
use std::sync::Arc;
use wv_core::{Embedder, Error, Result};

pub mod hash;
pub mod remote;

pub use hash::HashEmbedder;
pub use remote::RemoteEmbedder;

/// Build an embedder from configuration.
///
/// Backend selection: an explicit `backend` name wins; otherwise `remote`
/// when a `base_url` is configured, `hash` when not.
pub fn create_embedder(config: &EmbedderConfig) -> Result<Arc<dyn Embedder>> {
    let backend = match config.backend.as_deref() {
        Some(name) => name,
        None if config.base_url.is_some() => "remote",
        None => "hash",
    };

    match backend {
        "hash" => Ok(Arc::new(HashEmbedder::new())),
        "remote" => {
            let base_url = config.base_url.clone().ok_or_else(|| {
                Error::Inference("Remote embedder requires a base URL".to_string())
            })?;
            Ok(Arc::new(RemoteEmbedder::new(
                base_url,
                config.model_name.clone(),
                config.api_key.clone(),
            )?))
        }
        other => Err(Error::Inference(format!(
            "Unknown embedder backend: {}",
            other
        ))),
    }
}
