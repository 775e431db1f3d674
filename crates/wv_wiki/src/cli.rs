use clap::{Args, Subcommand};
use wv_core::{PersistStatus, Result, DEFAULT_CHUNK_SIZE};

use crate::preparer::Preparer;

#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
    #[command(subcommand)]
    pub command: PrepareCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PrepareCommands {
    /// Fetch, persist, chunk and embed one or more topics
    Run {
        /// Topics to prepare, processed sequentially
        #[arg(required = true)]
        topics: Vec<String>,
        /// Characters per chunk
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
    /// Show the ranked titles a query would resolve to
    Search {
        query: String,
    },
}

pub async fn handle_command(args: PrepareArgs, preparer: &Preparer) -> Result<()> {
    match args.command {
        PrepareCommands::Run { topics, chunk_size } => {
            for topic in topics {
                let doc = preparer.prepare(&topic, chunk_size).await?;
                if doc.is_empty() {
                    println!("❌ {} - nothing found", topic);
                    continue;
                }

                let dim = doc.embeddings.first().map(|e| e.len()).unwrap_or(0);
                let saved = match &doc.persistence {
                    PersistStatus::Saved(path) => format!("saved to {}", path.display()),
                    PersistStatus::Failed(reason) => format!("not saved ({})", reason),
                    PersistStatus::Skipped => "not saved".to_string(),
                };
                println!(
                    "✅ {} -> {} ({} chunks, dim {}, {})",
                    topic,
                    doc.resolved_title.as_deref().unwrap_or("?"),
                    doc.chunks.len(),
                    dim,
                    saved
                );
            }
        }
        PrepareCommands::Search { query } => {
            let titles = preparer.search(&query).await?;
            if titles.is_empty() {
                println!("❌ No results for '{}'", query);
            } else {
                println!("Results for '{}':", query);
                for (rank, title) in titles.iter().enumerate() {
                    println!("  {}. {}", rank + 1, title);
                }
            }
        }
    }
    Ok(())
}
