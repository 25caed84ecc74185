use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum RelayError {
    // upstream answered with something other than 200
    #[error("Modal endpoint error: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error(
        "Request timeout - the AI model is initializing (first request can take 2-3 minutes). \
         Please try again in a moment."
    )]
    UpstreamTimeout,

    #[error("Failed to connect to AI model: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    // inbound body that is not a valid QueryRequest
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Unreadable request body: {}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),
}

impl RelayError {
    // timeout, then body decoding, anything else means unreachable
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::UpstreamTimeout
        } else if err.is_decode() {
            RelayError::Internal(err.to_string())
        } else {
            RelayError::UpstreamUnreachable(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RelayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RelayError::UnreadableBody(rejection) => rejection.status(),
        }
    }

    // label for the upstream error counter
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::UpstreamStatus { .. } => "status",
            RelayError::UpstreamTimeout => "timeout",
            RelayError::UpstreamUnreachable(_) => "unreachable",
            RelayError::Internal(_) => "internal",
            RelayError::InvalidBody(_) => "invalid_body",
            RelayError::UnreadableBody(_) => "unreadable_body",
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Internal(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let err = RelayError::UpstreamStatus {
            status: 429,
            body: "slow down".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "Modal endpoint error: slow down");
    }

    #[test]
    fn invalid_upstream_status_falls_back_to_500() {
        let err = RelayError::UpstreamStatus {
            status: 1000,
            body: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_carries_cold_start_advice() {
        let err = RelayError::UpstreamTimeout;
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert!(err.to_string().contains("initializing"));
        assert_eq!(err.kind(), "timeout");
    }

    #[test]
    fn invalid_request_body_is_422() {
        let err = RelayError::InvalidBody("missing field `prompt`".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            err.to_string(),
            "Invalid request body: missing field `prompt`"
        );
    }

    #[test]
    fn json_failures_are_internal() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RelayError::from(parse);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Internal server error: "));
    }
}
