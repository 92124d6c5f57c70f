use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use askdocs_cli::{ChatSession, display_banner};
use askdocs_cohere::CohereClient;
use askdocs_rag::{HashEmbedder, RagConfig, RagEngine, open_store};

/// Fixed on-disk location of the persistent vector collection
const STORE_DIR: &str = "vector_store";

/// Directory of plain-text documents indexed on first run
const DATA_DIR: &str = "data";

#[derive(Parser)]
#[command(name = "askdocs")]
#[command(about = "Retrieval-augmented documentation assistant", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    // Missing credential is a fatal startup error, checked before anything
    // interactive happens
    let generator = CohereClient::from_env()?;

    let embedder = Arc::new(HashEmbedder::new());
    let store = Arc::new(open_store(&PathBuf::from(STORE_DIR), embedder).await?);

    let config = RagConfig {
        data_dir: PathBuf::from(DATA_DIR),
        top_k: 3,
    };

    let mut engine = RagEngine::new(store, Arc::new(generator), config);
    let seeded = engine.initialize().await?;
    tracing::debug!(stats = %engine.stats().await?, "engine ready");

    if seeded > 0 {
        println!("{} Indexed {} documents", "✅".green(), seeded);
    } else {
        println!("{} Reusing existing index", "✅".green());
    }

    display_banner();

    let mut session = ChatSession::new(engine);
    session.run().await?;

    Ok(())
}
