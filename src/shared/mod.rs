//! Shared Module
//!
//! This module contains types that are used by both the stores and the HTTP
//! layer: the post model with its visibility policy, payload error types, and
//! application configuration.
//!
//! # Overview
//!
//! Nothing in here depends on the server stack, so these types compile
//! without the `ssr` feature and can be reused by clients.

/// Post data structure and visibility policy
pub mod post;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use post::{Post, Visibility};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
