//! Intent classification: one LLM round trip plus a resilient parser.
//!
//! The parser is a deliberate heuristic against unreliable completion
//! formatting, not a precise classifier. Local models frequently wrap the
//! requested JSON in prose, or answer a pleasantry ("De acuerdo!") with
//! no JSON at all. The fallback policy and its 20-character threshold are
//! load-bearing business logic, pinned by the tests below.

use anyhow::Context;
use serde::Deserialize;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::llm::completion;
use crate::models::Intent;

/// Completions shorter than this with no parseable JSON are treated as
/// pleasantries rather than questions.
pub const SHORT_REPLY_THRESHOLD: usize = 20;

#[derive(Deserialize)]
struct IntentEnvelope {
    intent: Intent,
}

/// Classify a question into one of the three intents.
///
/// Fails only when the LLM collaborator itself is unreachable or errors;
/// a malformed-but-present completion is absorbed by [`parse_intent`].
pub async fn classify(
    client: &reqwest::Client,
    config: &LlmConfig,
    question: &str,
) -> Result<Intent> {
    let prompt = build_classification_prompt(question);

    let completion = completion::complete(client, config, &prompt)
        .await
        .context("classification completion failed")
        .map_err(Error::Classification)?;

    let intent = parse_intent(&completion);
    tracing::debug!(?intent, raw = %completion, "question classified");
    Ok(intent)
}

fn build_classification_prompt(question: &str) -> String {
    format!(
        "Clasifica la pregunta del usuario en 'pregunta_general', \
         'reporte_de_problema' o 'despedida'. Responde solo con JSON.\n\
         'pregunta_general': El usuario pide información (¿qué es?, ¿cuántos?, ¿cómo?).\n\
         'reporte_de_problema': El usuario describe un problema, algo está roto o no funciona.\n\
         'despedida': El usuario expresa gratitud o se despide (gracias, adiós, perfecto, vale).\n\
         Pregunta: {question}\n\
         Formato: {{\"intent\": \"<intención>\"}}"
    )
}

/// Resilient parse of the raw completion text.
///
/// Takes the substring from the first `{` to the last `}` and tries to
/// parse it as `{"intent": ...}`. When that fails — no braces at all,
/// unparseable JSON, or an unknown label — short completions default to
/// `Farewell` and everything else to `GeneralQuestion`.
pub fn parse_intent(completion: &str) -> Intent {
    if let Some(json) = extract_json_object(completion) {
        if let Ok(envelope) = serde_json::from_str::<IntentEnvelope>(json) {
            return envelope.intent;
        }
    }

    if completion.chars().count() < SHORT_REPLY_THRESHOLD {
        Intent::Farewell
    } else {
        Intent::GeneralQuestion
    }
}

/// First `{` to last `}`, spanning the whole text.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
