//! Ingestion pipeline: enumerate corpus files, read them into documents,
//! split into overlapping chunks.
//!
//! The pipeline is all-or-nothing. A corrupt file with a recognized
//! extension aborts the run, and an empty corpus refuses to proceed so a
//! working index is never replaced by an empty one.

pub mod reader;
pub mod splitter;

use std::path::Path;

use walkdir::WalkDir;

use crate::config::ChunkConfig;
use crate::error::Error;
use crate::models::{Chunk, Document};

/// Recursively read every recognized document under `dir`.
///
/// Files are visited in name order so repeated runs over the same corpus
/// produce chunks in the same order.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>, Error> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(docs) = reader::read_document(dir, entry.path())? {
            tracing::debug!(path = %entry.path().display(), parts = docs.len(), "loaded");
            documents.extend(docs);
        }
    }

    Ok(documents)
}

/// Split documents into chunks, preserving provenance metadata.
pub fn chunk_documents(documents: &[Document], cfg: &ChunkConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for doc in documents {
        for (chunk_index, content) in splitter::split_text(&doc.text, cfg).into_iter().enumerate()
        {
            chunks.push(Chunk {
                source: doc.source.clone(),
                page: doc.page,
                chunk_index,
                content,
            });
        }
    }

    chunks
}

/// Full loader-and-chunker stage: `ingest(dir) → chunks`.
///
/// `Error::NoDocuments` when the directory yields nothing chunkable; the
/// caller must abort before touching the existing index.
pub fn ingest(dir: &Path, cfg: &ChunkConfig) -> Result<Vec<Chunk>, Error> {
    let documents = load_corpus(dir)?;
    if documents.is_empty() {
        return Err(Error::NoDocuments(dir.to_path_buf()));
    }

    tracing::info!(documents = documents.len(), "corpus loaded");

    let chunks = chunk_documents(&documents, cfg);
    if chunks.is_empty() {
        // Documents existed but every one was blank.
        return Err(Error::NoDocuments(dir.to_path_buf()));
    }

    tracing::info!(chunks = chunks.len(), "corpus chunked");
    Ok(chunks)
}
