use axum::http::StatusCode;

pub async fn metrics_handler() -> Result<String, (StatusCode, String)> {
    crate::metrics::render().map_err(|e| {
        tracing::error!(error = %e, "failed to encode metrics");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
