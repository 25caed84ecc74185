use serde::{Deserialize, Serialize};

// Inbound request for /query and /chat
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QueryRequest {
    pub prompt: String,
    // accepted but not forwarded upstream
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<i64>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
}

fn default_max_tokens() -> Option<i64> {
    Some(200)
}

fn default_temperature() -> Option<f64> {
    Some(0.7)
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub response: String,
    pub status: String,
}

impl QueryResponse {
    pub fn success(response: String) -> Self {
        Self {
            response,
            status: "success".to_string(),
        }
    }
}

// Error body. `detail` and `error` carry the same message.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: String,
    pub status: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            detail: message.clone(),
            error: message,
            status: "error".to_string(),
        }
    }
}

// Body sent to the inference endpoint
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpstreamPayload {
    pub prompt: String,
}

// Body returned by the inference endpoint
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub response: String,
}

#[derive(Serialize, Debug)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
