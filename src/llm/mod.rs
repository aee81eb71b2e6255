//! Narrow contracts over the external language-model collaborators:
//! `embed(text) → vector` and `complete(prompt) → text`. Both are plain
//! HTTP round trips to Ollama or an OpenAI-compatible endpoint; nothing
//! in this crate depends on which one is behind the config.

pub mod completion;
pub mod embeddings;
