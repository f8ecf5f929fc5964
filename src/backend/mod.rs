//! Backend Module
//!
//! This module contains all server-side code: the three in-memory stores,
//! the HTTP handlers that drive them, and the Axum server setup.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, session registry, auth handlers
//! - **`posts`** - Content store and blog post handlers
//! - **`middleware`** - Token and payload extractors
//! - **`error`** - Backend error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, sessions, auth handlers
//! ├── posts/          - Posts and visibility filtering
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! - **register** → credential store
//! - **authenticate** → credential store, then session registry issues a token
//! - **logout** → session registry revokes the token
//! - **create post** → session registry resolves the caller, content store
//!   appends the post
//! - **list posts** → session registry optionally resolves the caller,
//!   content store filters by visibility
//!
//! # State Management
//!
//! `AppState` holds each store in its own `Arc<RwLock<>>`. Stores are
//! created once per process and passed to handlers through Axum state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and session management
pub mod auth;

/// Blog posts and visibility filtering
pub mod posts;

/// Backend error types
pub mod error;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use auth::{CredentialStore, SessionRegistry};
pub use posts::ContentStore;
