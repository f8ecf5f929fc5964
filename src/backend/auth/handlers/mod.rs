//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs           - Module exports and documentation
//! ├── types.rs         - Request and response types
//! ├── register.rs      - User registration handler
//! ├── authenticate.rs  - Login handler (issues a session token)
//! └── logout.rs        - Logout handler (revokes a session token)
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /main-task/user
//! - **`authenticate`** - POST /main-task/authenticate
//! - **`logout`** - POST /main-task/logout

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Authentication handler
pub mod authenticate;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{AuthenticateRequest, RegisterRequest, TokenResponse};

// Re-export handlers
pub use register::register;
pub use authenticate::authenticate;
pub use logout::logout;
