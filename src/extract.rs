use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::RelayError;

// JSON body extractor that answers rejections with the relay's JSON error
// body. The Content-Type header is not required.
pub struct RelayJson<T>(pub T);

impl<T, S> FromRequest<S> for RelayJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            RelayError::InvalidBody(e.to_string())
        })?;
        Ok(RelayJson(value))
    }
}
