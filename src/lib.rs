//! Postgate - Session-Gated Blog Service
//!
//! Postgate is a small content service with session-based access control.
//! Users register with a login and password, exchange them for opaque
//! session tokens, and publish posts whose visibility depends on who is
//! asking.
//!
//! # Overview
//!
//! - **Credential store** - users with bcrypt password hashes
//! - **Session registry** - random tokens bound to users, revocable one by one
//! - **Content store** - posts with a three-tier visibility policy
//!
//! All state is in memory and lives for the lifetime of the process.
//!
//! # Module Structure
//!
//! - **`shared`** - Types usable without the server stack
//!   - Post model and visibility policy
//!   - Payload error types
//!   - Application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, handlers and extractors
//!   - Credential store, session registry, content store
//!   - Error taxonomy and HTTP status mapping
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend module and the server binary
//!
//! # Visibility
//!
//! | Tier | Anonymous | Any session | Owner |
//! |---|---|---|---|
//! | `public` | yes | yes | yes |
//! | `authenticated` | no | yes | yes |
//! | `private` | no | no | yes |
//!
//! # Usage
//!
//! ```rust,no_run
//! use postgate::backend::server::create_app;
//! use postgate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Each store sits behind its own `Arc<tokio::sync::RwLock<>>`, so listings
//! always observe fully completed writes.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
