//! # knowledge-pilot
//!
//! An internal knowledge assistant: employees ask questions against a
//! private document corpus, and the service answers from the corpus or
//! opens a support ticket on request.
//!
//! ## Architecture
//!
//! Two pipelines share one index:
//!
//! ```text
//!  Ingestion (offline, `ingest` binary)
//!
//!   knowledge_base/ ──▶ Loader ──▶ Splitter ──▶ Embeddings ──▶ rebuild
//!   (.pdf / .txt)       per-file    1000/100     batched        swap-in
//!                       readers     overlap                     vectors.json
//!
//!  Serving (`knowledge-pilot` binary)
//!
//!   GET /ask ──▶ Router ──┬─ "ACTION_CREATE_TICKET:…" ─▶ Ticket Store
//!                         │
//!                         └─▶ Intent Classifier (LLM + resilient parse)
//!                                ├─ pregunta_general ──▶ RAG answer
//!                                ├─ reporte_de_problema ▶ RAG answer + follow-up
//!                                └─ despedida ──────────▶ canned reply
//! ```
//!
//! Every failure under the router maps to one degraded response; the
//! caller never sees a protocol-level error.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for directories, chunking, and LLM settings
//! - [`models`] - Shared data types: `Document`, `Chunk`, `Intent`, `Ticket`, request/response types
//! - [`error`] - The pipeline failure kinds
//! - [`ingest`] - Document loading, format readers, and the overlap splitter
//! - [`llm`] - Embedding and completion round trips to Ollama or OpenAI-compatible APIs
//! - [`search::vector`] - Persisted vector index with cosine similarity and atomic rebuild
//! - [`tickets`] - Append-only sqlite support-ticket table
//! - [`router`] - Intent classification, RAG answering, and top-level dispatch
//! - [`api`] - Axum HTTP handlers
//! - [`state`] - Shared application state holding the index, tickets, and HTTP client

pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod llm;
pub mod models;
pub mod router;
pub mod search;
pub mod state;
pub mod tickets;
