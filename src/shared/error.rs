//! Shared Error Types
//!
//! This module defines error types that are shared between the request layer
//! and the stores. They describe problems with the content of incoming data
//! rather than with authentication state. JSON decoding failures are reported
//! by the backend directly.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or empty
//!
//! # Usage
//!
//! ```rust
//! use postgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("login", "field is required");
//! ```
use thiserror::Error;

/// Shared error types for payload problems
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a missing required field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, "field is required")
    }
}
