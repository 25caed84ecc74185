use axum::{Json, extract::State};
use std::sync::Arc;

use crate::error::RelayError;
use crate::extract::RelayJson;
use crate::metrics::REQUEST_TOTAL;
use crate::models::{QueryRequest, QueryResponse};
use crate::prompt::{format_chat_prompt, strip_echo};
use crate::state::AppState;
use crate::upstream;

// wraps the prompt in the chat template and drops the echoed template from the answer
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    RelayJson(payload): RelayJson<QueryRequest>,
) -> Result<Json<QueryResponse>, RelayError> {
    REQUEST_TOTAL.with_label_values(&["chat"]).inc();
    tracing::info!(
        prompt_chars = payload.prompt.len(),
        max_tokens = ?payload.max_tokens,
        temperature = ?payload.temperature,
        "chat request"
    );

    let wrapped = format_chat_prompt(&payload.prompt);
    let generated = upstream::generate(&state, wrapped.clone()).await?;

    Ok(Json(QueryResponse::success(strip_echo(&generated, &wrapped))))
}
