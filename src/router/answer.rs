//! Retrieval-augmented answering: embed the question, pull the nearest
//! chunks, and ask the model for a grounded answer.

use anyhow::Context;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::llm::{completion, embeddings};
use crate::search::vector::{RetrievedChunk, VectorStore};

/// Answer a question from the corpus. The completion is returned
/// verbatim; with an empty index the model is simply asked to answer with
/// no context and is expected to say it lacks information.
///
/// Fails with `Error::Generation` only when a collaborator (embedding or
/// completion service) fails.
pub async fn answer(
    client: &reqwest::Client,
    config: &LlmConfig,
    vectors: &VectorStore,
    retrieval_k: usize,
    question: &str,
) -> Result<String> {
    let query_embedding = embeddings::embed_single(client, config, question)
        .await
        .context("failed to embed question")
        .map_err(Error::Generation)?;

    let hits = vectors.search(&query_embedding, retrieval_k);
    tracing::debug!(hits = hits.len(), "context retrieved");

    let prompt = build_rag_prompt(&hits, question);

    completion::complete(client, config, &prompt)
        .await
        .context("answer completion failed")
        .map_err(Error::Generation)
}

/// The answer prompt: retrieved chunk texts as context, then the
/// question. Concise, grounded, Spanish.
fn build_rag_prompt(hits: &[RetrievedChunk], question: &str) -> String {
    let mut context = String::new();
    for hit in hits {
        if !context.is_empty() {
            context.push_str("\n\n");
        }
        context.push_str(&hit.content);
    }

    format!(
        "Usa el siguiente contexto para responder en español de forma concisa y útil a la pregunta.\n\
         Contexto: {context}\n\
         Pregunta: {question}\n\
         Respuesta:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(content: &str) -> RetrievedChunk {
        RetrievedChunk {
            source: "doc.txt".to_string(),
            page: None,
            chunk_index: 0,
            content: content.to_string(),
            score: 0.9,
        }
    }

    #[test]
    fn test_prompt_contains_context_and_question() {
        let prompt = build_rag_prompt(
            &[hit("La VPN usa el puerto 443."), hit("El cliente es Forticlient.")],
            "¿cómo configuro la vpn?",
        );
        assert!(prompt.contains("La VPN usa el puerto 443."));
        assert!(prompt.contains("El cliente es Forticlient."));
        assert!(prompt.contains("Pregunta: ¿cómo configuro la vpn?"));
    }

    #[test]
    fn test_prompt_with_no_hits_keeps_going() {
        // Graceful degradation: an empty index still yields a well-formed
        // prompt with an empty context block.
        let prompt = build_rag_prompt(&[], "¿qué es el plan de pensiones?");
        assert!(prompt.contains("Contexto: \n"));
        assert!(prompt.contains("¿qué es el plan de pensiones?"));
    }

    #[test]
    fn test_context_chunks_are_separated() {
        let prompt = build_rag_prompt(&[hit("uno"), hit("dos")], "p");
        assert!(prompt.contains("uno\n\ndos"));
    }
}
