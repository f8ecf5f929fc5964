/**
 * JSON Payload Extractor
 *
 * `Payload<T>` reads the request body as JSON without requiring a
 * `Content-Type` header. An empty or blank body, or a body that is not valid
 * JSON for `T`, is rejected as invalid input (400) with no response body.
 *
 * Request types use optional fields so that `{}` decodes successfully; the
 * handlers then check each required field with [`require`].
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// JSON request body
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("Failed to read request body: {}", e);
            BackendError::invalid_input(e.body_text())
        })?;

        parse_payload(&bytes).map(Payload)
    }
}

/// Decode a JSON body, treating a blank body as missing input
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(BackendError::invalid_input("request body is empty"));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected malformed payload: {}", e);
        BackendError::from(e)
    })
}

/// Take a required string field, rejecting absent or empty values
pub fn require(value: Option<String>, field: &'static str) -> Result<String, SharedError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SharedError::missing(field))
}
