use axum::extract::{Query, State};
use axum::Json;

use crate::models::{AskParams, AskResponse};
use crate::router;
use crate::state::AppState;

/// GET /ask?question=... — the single query endpoint.
///
/// Always returns 200 with a well-formed body: failure absorption happens
/// inside the router, so this handler has no error arm.
pub async fn ask(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> Json<AskResponse> {
    Json(router::route(&state, &params.question).await)
}
