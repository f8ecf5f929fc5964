/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by the stores and the HTTP
 * handlers. Every failure path of a store operation is one of these variants,
 * and the boundary maps each variant to exactly one status code.
 *
 * # Error Kinds
 *
 * - `InvalidInput` - The request payload is missing or carries no usable fields
 * - `NotFound` - A credential lookup found no matching login
 * - `Unauthorized` - Password mismatch, or a token that is not live
 * - `StateError` - Internal failure (e.g. the hashing backend rejected input)
 *
 * Payload decoding problems arrive as `SharedError` or `serde_json::Error`
 * and are reported as invalid input.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use postgate::backend::error::BackendError;
///
/// let err = BackendError::unauthorized("token is not live");
/// assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request carried no fields, or a required field was missing
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// No credential record matches the requested login
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Credentials or token rejected
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Internal failure unrelated to caller input
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Payload could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `StateError` - 500 Internal Server Error
    /// - `SharedError` - 400 Bad Request (a required field is missing)
    /// - `SerializationError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::SerializationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
