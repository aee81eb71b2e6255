use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the vector index and ticket database are stored
    pub data_dir: PathBuf,
    /// Source directory of corpus documents (.pdf / .txt)
    pub knowledge_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// LLM provider configuration
    pub llm: LlmConfig,
    /// Chunking parameters for ingestion
    pub chunk: ChunkConfig,
    /// Number of chunks retrieved per question
    pub retrieval_k: usize,
}

/// Chunk splitting parameters. Invariant: `overlap < max_chars`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Hard ceiling on chunk length, in characters
    pub max_chars: usize,
    /// Characters shared between a chunk and its predecessor
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: 1000,
            overlap: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "ollama" or "openai"
    pub provider: String,
    /// Base URL for the LLM API
    pub base_url: String,
    /// Model name for chat completions (classification and answers)
    pub chat_model: String,
    /// Model name for embeddings
    pub embedding_model: String,
    /// API key (only needed for cloud providers)
    pub api_key: Option<String>,
    /// Embedding vector dimension
    pub embedding_dim: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            knowledge_dir: PathBuf::from("./knowledge_base"),
            bind_addr: "127.0.0.1:8000".to_string(),
            llm: LlmConfig::default(),
            chunk: ChunkConfig::default(),
            retrieval_k: 4,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: "http://localhost:11434".to_string(),
            chat_model: "llama3.1:8b".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            api_key: None,
            embedding_dim: 768,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("PILOT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("PILOT_KNOWLEDGE_DIR") {
            config.knowledge_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("PILOT_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            config.llm.provider = provider;
        }
        if let Ok(url) = std::env::var("LLM_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Ok(model) = std::env::var("LLM_CHAT_MODEL") {
            config.llm.chat_model = model;
        }
        if let Ok(model) = std::env::var("LLM_EMBEDDING_MODEL") {
            config.llm.embedding_model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            config.llm.api_key = Some(key);
        }
        if let Ok(dim) = std::env::var("LLM_EMBEDDING_DIM") {
            if let Ok(d) = dim.parse() {
                config.llm.embedding_dim = d;
            }
        }
        if let Ok(val) = std::env::var("PILOT_CHUNK_MAX_CHARS") {
            if let Ok(v) = val.parse() {
                config.chunk.max_chars = v;
            }
        }
        if let Ok(val) = std::env::var("PILOT_CHUNK_OVERLAP") {
            if let Ok(v) = val.parse() {
                config.chunk.overlap = v;
            }
        }
        if let Ok(val) = std::env::var("PILOT_RETRIEVAL_K") {
            if let Ok(v) = val.parse() {
                config.retrieval_k = v;
            }
        }

        // The splitter requires overlap < max_chars to make progress. A
        // nonsense combination from the environment falls back to the
        // defaults rather than aborting startup.
        if config.chunk.overlap >= config.chunk.max_chars || config.chunk.max_chars == 0 {
            config.chunk = ChunkConfig::default();
        }

        config
    }

    pub fn vector_dir(&self) -> PathBuf {
        self.data_dir.join("vector_store")
    }

    pub fn tickets_db_path(&self) -> PathBuf {
        self.data_dir.join("tickets.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunk_config_is_valid() {
        let cfg = ChunkConfig::default();
        assert_eq!(cfg.max_chars, 1000);
        assert_eq!(cfg.overlap, 100);
        assert!(cfg.overlap < cfg.max_chars);
    }

    #[test]
    fn test_derived_paths() {
        let config = Config::default();
        assert!(config.vector_dir().ends_with("vector_store"));
        assert!(config.tickets_db_path().ends_with("tickets.db"));
    }
}
