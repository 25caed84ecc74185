use std::time::Instant;

use crate::error::RelayError;
use crate::metrics::{REQUEST_LATENCY, UPSTREAM_ERRORS};
use crate::models::{UpstreamPayload, UpstreamResponse};
use crate::state::AppState;

// one POST per call, no retries; a 200 without `response` yields ""
pub async fn generate(state: &AppState, prompt: String) -> Result<String, RelayError> {
    let start_time = Instant::now();
    let result = call(state, UpstreamPayload { prompt }).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    if let Err(e) = &result {
        UPSTREAM_ERRORS.with_label_values(&[e.kind()]).inc();
        tracing::warn!(kind = e.kind(), error = %e, "upstream call failed");
    }
    result
}

async fn call(state: &AppState, payload: UpstreamPayload) -> Result<String, RelayError> {
    let res = state
        .client
        .post(&state.upstream_url)
        .json(&payload)
        .timeout(state.upstream_timeout)
        .send()
        .await
        .map_err(RelayError::from_transport)?;

    let status = res.status();
    let body = res.text().await.map_err(RelayError::from_transport)?;

    if status != reqwest::StatusCode::OK {
        return Err(RelayError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: UpstreamResponse = serde_json::from_str(&body)?;
    tracing::debug!(chars = parsed.response.len(), "upstream responded");
    Ok(parsed.response)
}
