use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::RelayError;
use crate::extract::RelayJson;
use crate::metrics::REQUEST_TOTAL;
use crate::models::{QueryRequest, QueryResponse};
use crate::state::AppState;
use crate::upstream;

// forwards the prompt as-is
pub async fn query_handler(
    State(state): State<Arc<AppState>>,
    RelayJson(payload): RelayJson<QueryRequest>,
) -> Result<Json<QueryResponse>, RelayError> {
    REQUEST_TOTAL.with_label_values(&["query"]).inc();
    tracing::info!(
        prompt_chars = payload.prompt.len(),
        max_tokens = ?payload.max_tokens,
        temperature = ?payload.temperature,
        "query request"
    );

    let response = upstream::generate(&state, payload.prompt).await?;
    Ok(Json(QueryResponse::success(response)))
}
