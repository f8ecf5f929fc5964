//! Authentication Module
//!
//! This module handles user registration, credential verification and the
//! session token lifecycle.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`users`** - `CredentialStore`: users and their password hashes
//! - **`sessions`** - `SessionRegistry`: opaque tokens bound to users
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: login + password → password hashed → user stored
//! 2. **Authenticate**: login + password verified → new token issued
//! 3. **Logout**: token revoked; other tokens of the user stay live
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at a fixed, configured cost
//! - Tokens are random UUIDs checked against the registry on every request
//! - Tokens do not expire; they live until logout or process restart

/// Password hashing
pub mod password;

/// Credential store
pub mod users;

/// Session registry
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use users::{CredentialStore, User};
pub use sessions::SessionRegistry;
pub use handlers::{authenticate, logout, register};
pub use handlers::types::{AuthenticateRequest, RegisterRequest, TokenResponse};
