use std::path::Path;
use std::sync::Arc;
use wv_core::{Error, RawTextStore, Result};

pub mod backends;

pub use backends::{FsStore, MemoryStore};

/// Default directory for raw article text.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Build a raw-text store by backend name (`fs` or `memory`).
pub fn create_store(kind: &str, dir: &Path) -> Result<Arc<dyn RawTextStore>> {
    match kind {
        "fs" => Ok(Arc::new(FsStore::new(dir)?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(Error::Storage(format!("Unknown store backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::{FsStore, MemoryStore};
    pub use super::create_store;
    pub use wv_core::{RawTextStore, Result};
}
