//! Middleware Module
//!
//! Request extractors shared by all handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Session token extraction and resolution
//! - **`payload`** - JSON body extraction with empty-payload handling

pub mod auth;
pub mod payload;

pub use auth::{AuthUser, BearerToken, MaybeAuthUser, extract_token};
pub use payload::{Payload, parse_payload, require};
