/**
 * Error Conversion
 *
 * This module lets handlers return `BackendError` directly. The error is
 * turned into a response carrying only the mapped status code; the message
 * is logged server-side and never sent to the caller.
 */

use axum::{
    response::{Response, IntoResponse},
    http::StatusCode,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status.as_u16(), self);
        }

        status.into_response()
    }
}
