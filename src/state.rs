use std::sync::Arc;

use crate::config::Config;
use crate::search::vector::VectorStore;
use crate::tickets::TicketStore;

/// Shared application state: the process-wide collaborator handles,
/// constructed once at startup and passed into handlers explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vectors: Arc<VectorStore>,
    pub tickets: Arc<TicketStore>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let vectors = VectorStore::open_or_create(&config.vector_dir())?;
        let tickets = TicketStore::open(&config.tickets_db_path())?;

        Ok(Self {
            config,
            vectors: Arc::new(vectors),
            tickets: Arc::new(tickets),
            // Bounded timeouts on every collaborator round trip; expiry
            // surfaces as a classification/generation error upstream.
            http_client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
        })
    }
}
