use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::Chunk;

/// A stored index entry: a chunk plus its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VectorEntry {
    source: String,
    page: Option<usize>,
    chunk_index: usize,
    content: String,
    embedding: Vec<f32>,
}

/// In-memory vector index with disk persistence and cosine similarity
/// search. Serving opens it once at startup and only reads; ingestion
/// replaces it wholesale via [`VectorStore::rebuild`].
pub struct VectorStore {
    entries: RwLock<Vec<VectorEntry>>,
    persist_path: std::path::PathBuf,
}

/// A chunk returned by similarity search.
#[derive(Debug, Clone)]
pub struct RetrievedChunk {
    pub source: String,
    pub page: Option<usize>,
    pub chunk_index: usize,
    pub content: String,
    pub score: f32,
}

impl VectorStore {
    pub fn open_or_create(vector_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(vector_dir)?;
        let persist_path = vector_dir.join("vectors.json");

        let entries = if persist_path.exists() {
            let data =
                std::fs::read_to_string(&persist_path).context("Failed to read vector index")?;
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self {
            entries: RwLock::new(entries),
            persist_path,
        })
    }

    /// Atomically replace the entire index with `chunks` and their
    /// embeddings (parallel slices, same length).
    ///
    /// The new index is serialized beside the old one and swapped in with
    /// a rename, so a crash mid-rebuild leaves the previous index intact
    /// and readers never observe a partial file.
    pub fn rebuild(&self, chunks: &[Chunk], embeddings: &[Vec<f32>]) -> Result<()> {
        anyhow::ensure!(
            chunks.len() == embeddings.len(),
            "chunk/embedding count mismatch: {} vs {}",
            chunks.len(),
            embeddings.len()
        );

        let entries: Vec<VectorEntry> = chunks
            .iter()
            .zip(embeddings.iter())
            .map(|(chunk, embedding)| VectorEntry {
                source: chunk.source.clone(),
                page: chunk.page,
                chunk_index: chunk.chunk_index,
                content: chunk.content.clone(),
                embedding: embedding.clone(),
            })
            .collect();

        let data = serde_json::to_string(&entries)?;
        let tmp_path = self.persist_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, data).context("Failed to write new vector index")?;
        std::fs::rename(&tmp_path, &self.persist_path)
            .context("Failed to swap new vector index into place")?;

        *self.entries.write() = entries;
        Ok(())
    }

    /// Top-k nearest neighbors by cosine similarity, highest first.
    pub fn search(&self, query_embedding: &[f32], k: usize) -> Vec<RetrievedChunk> {
        let entries = self.entries.read();

        let mut scored: Vec<(f32, &VectorEntry)> = entries
            .iter()
            .map(|e| (cosine_similarity(query_embedding, &e.embedding), e))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(score, e)| RetrievedChunk {
                source: e.source.clone(),
                page: e.page,
                chunk_index: e.chunk_index,
                content: e.content.clone(),
                score,
            })
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for i in 0..a.len() {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
