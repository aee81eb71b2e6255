//! Top-level request router.
//!
//! Per request the router either short-circuits to ticket creation,
//! or classifies the question and dispatches to the answer engine or a
//! canned reply. Every failure below this boundary is absorbed into a
//! generic degraded response: availability over transparency, by the
//! existing product contract. The failure detail goes to the logs, never
//! to the caller.

pub mod answer;
pub mod classifier;

use crate::error::Result;
use crate::models::{AskResponse, Intent, Ticket};
use crate::state::AppState;

/// Sentinel prefix that bypasses classification entirely. The frontend
/// sends it when the user confirms they want a ticket; everything after
/// the colon is the problem description.
pub const TICKET_MARKER: &str = "ACTION_CREATE_TICKET:";

/// Appended to problem-report answers so the caller prompts the user to
/// confirm resolution.
pub const PROBLEM_FOLLOW_UP: &str = "¿Esta información soluciona tu problema?";

/// Canned reply for farewells; no collaborator calls involved.
pub const FAREWELL_REPLY: &str =
    "De nada, ¡un placer ayudar! Si tienes cualquier otra consulta, aquí estaré. 😊";

/// The one degraded response every internal failure maps to.
pub const FALLBACK_REPLY: &str = "Lo siento, ha ocurrido un error.";

/// Route a question to a response. Total: every internal error is logged
/// with the original question and converted to the fallback reply.
pub async fn route(state: &AppState, question: &str) -> AskResponse {
    match route_inner(state, question).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(question, error = format!("{e:#}"), "request failed");
            AskResponse {
                answer: FALLBACK_REPLY.to_string(),
                follow_up_required: false,
            }
        }
    }
}

async fn route_inner(state: &AppState, question: &str) -> Result<AskResponse> {
    if let Some(description) = question.strip_prefix(TICKET_MARKER) {
        let ticket = state.tickets.create_ticket(description)?;
        tracing::info!(ticket_id = ticket.id, "support ticket created");
        return Ok(AskResponse {
            answer: ticket_confirmation(&ticket),
            follow_up_required: false,
        });
    }

    let intent = classifier::classify(&state.http_client, &state.config.llm, question).await?;
    tracing::info!(?intent, "question routed");

    match intent {
        Intent::GeneralQuestion => {
            let answer = answer::answer(
                &state.http_client,
                &state.config.llm,
                &state.vectors,
                state.config.retrieval_k,
                question,
            )
            .await?;
            Ok(AskResponse {
                answer,
                follow_up_required: false,
            })
        }
        Intent::ProblemReport => {
            let solution = answer::answer(
                &state.http_client,
                &state.config.llm,
                &state.vectors,
                state.config.retrieval_k,
                question,
            )
            .await?;
            Ok(AskResponse {
                answer: problem_answer(&solution),
                follow_up_required: true,
            })
        }
        Intent::Farewell => Ok(AskResponse {
            answer: FAREWELL_REPLY.to_string(),
            follow_up_required: false,
        }),
    }
}

/// Problem-report answers carry the retrieved solution plus a clarifying
/// question; the `follow_up_required` flag tells the caller to expect the
/// user's confirmation.
fn problem_answer(solution: &str) -> String {
    format!("{solution}\n\n{PROBLEM_FOLLOW_UP}")
}

fn ticket_confirmation(ticket: &Ticket) -> String {
    format!(
        "De acuerdo. He creado el ticket de soporte #{} con tu problema: '{}'. \
         El equipo técnico se pondrá en contacto contigo.",
        ticket.id, ticket.description
    )
}
