pub mod chunking;
pub mod embedder;
pub mod error;
pub mod source;
pub mod store;
pub mod types;

pub use chunking::chunk_text;
pub use embedder::Embedder;
pub use error::Error;
pub use source::ArticleSource;
pub use store::{sanitize_topic, RawTextStore};
pub use types::{ArticlePage, PersistStatus, PreparedDocument};

pub type Result<T> = std::result::Result<T, Error>;

/// Default number of characters per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

pub mod prelude {
    pub use super::{
        chunk_text, ArticlePage, ArticleSource, Embedder, Error, PersistStatus, PreparedDocument,
        RawTextStore, Result,
    };
}
