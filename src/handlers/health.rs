use axum::Json;

use crate::models::{HealthResponse, RootResponse};

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "OceanGPT API is running",
        status: "healthy",
    })
}

// static, never touches the upstream
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "OceanGPT Frontend API",
        version: env!("CARGO_PKG_VERSION"),
    })
}
