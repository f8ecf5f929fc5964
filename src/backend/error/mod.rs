//! Backend Error Module
//!
//! This module defines the error taxonomy shared by the stores and the HTTP
//! handlers.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions, constructors and status mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! Handlers return `Result<_, BackendError>`. On failure the response carries
//! the mapped status code and an empty body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;

/// Result alias used throughout the backend
pub type BackendResult<T> = Result<T, BackendError>;
