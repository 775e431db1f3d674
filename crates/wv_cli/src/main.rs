use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wv_core::{Embedder, Result, DEFAULT_CHUNK_SIZE};
use wv_inference::EmbedderConfig;
use wv_wiki::wikipedia::WIKIPEDIA_API_URL;
use wv_wiki::{handle_command, PrepareArgs, PrepareCommands, Preparer, WikipediaSource};

#[derive(Parser, Debug)]
#[command(name = "wikivec", author, version, about = "Fetch Wikipedia articles, chunk them, and compute embeddings", long_about = None)]
struct Cli {
    /// Store backend for raw article text
    #[arg(long, default_value = "fs", help = "Available stores: fs (default), memory")]
    store: String,
    /// Directory for raw article text
    #[arg(long, default_value = wv_storage::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Embedding backend
    #[arg(long, help = "Available embedders: hash (default), remote")]
    embedder: Option<String>,
    /// Base URL of an OpenAI-style embeddings endpoint (selects the remote embedder)
    #[arg(long)]
    model_url: Option<String>,
    /// Embedding model name for the remote embedder
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
    /// MediaWiki API endpoint
    #[arg(long, default_value = WIKIPEDIA_API_URL)]
    wiki_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch, persist, chunk and embed one or more topics
    Prepare {
        #[arg(required = true)]
        topics: Vec<String>,
        /// Characters per chunk
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
    /// Show the ranked titles a query would resolve to
    Search { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let store = wv_storage::create_store(&cli.store, &cli.data_dir)?;
    info!(
        "💾 Store initialized (using {}, dir {})",
        cli.store,
        cli.data_dir.display()
    );

    let embedder_config = EmbedderConfig {
        backend: cli.embedder,
        base_url: cli.model_url,
        model_name: cli.model,
        api_key: cli.api_key,
    };
    let embedder = wv_inference::create_embedder(&embedder_config)?;
    info!("🧠 Embedder initialized (using {})", embedder.name());

    let source = Arc::new(WikipediaSource::new(&cli.wiki_url)?);
    let preparer = Preparer::new(source, store, embedder);
    info!("📚 Article source ready (using {})", preparer.source_name());

    let args = match cli.command {
        Commands::Prepare { topics, chunk_size } => PrepareArgs {
            command: PrepareCommands::Run { topics, chunk_size },
        },
        Commands::Search { query } => PrepareArgs {
            command: PrepareCommands::Search { query },
        },
    };

    handle_command(args, &preparer).await
}
