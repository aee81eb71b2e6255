//! Standalone ingestion run: read the knowledge directory, chunk, embed,
//! and atomically replace the persisted vector index.
//!
//! Exits non-zero without touching the existing index when the corpus is
//! empty or any recognized file fails to load.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use knowledge_pilot::config::Config;
use knowledge_pilot::ingest;
use knowledge_pilot::llm::embeddings;
use knowledge_pilot::search::vector::VectorStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Knowledge directory: {}", config.knowledge_dir.display());
    tracing::info!("Vector index: {}", config.vector_dir().display());

    // Load and chunk first; a hard failure here must abort before the
    // index is opened for writing.
    let chunks = ingest::ingest(&config.knowledge_dir, &config.chunk)?;

    let client = reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .timeout(std::time::Duration::from_secs(120))
        .build()?;

    tracing::info!(
        "Embedding {} chunks with model {}",
        chunks.len(),
        config.llm.embedding_model
    );
    let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
    let vectors = embeddings::embed_batch(&client, &config.llm, &texts)
        .await
        .context("embedding the corpus failed; existing index left untouched")?;

    let store = VectorStore::open_or_create(&config.vector_dir())?;
    store.rebuild(&chunks, &vectors)?;

    tracing::info!("Ingestion complete: {} entries indexed", store.entry_count());
    Ok(())
}
