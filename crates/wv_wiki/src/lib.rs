pub mod cli;
pub mod preparer;
pub mod wikipedia;

pub use cli::{handle_command, PrepareArgs, PrepareCommands};
pub use preparer::Preparer;
pub use wikipedia::WikipediaSource;

pub mod prelude {
    pub use super::{Preparer, WikipediaSource};
    pub use wv_core::{ArticlePage, Error, PreparedDocument, Result};
}
