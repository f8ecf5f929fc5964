//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Auth and blog post endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Routes
//!
//! - `GET /` - Welcome text
//! - `POST /main-task/user` - User registration
//! - `POST /main-task/authenticate` - User login
//! - `POST /main-task/logout` - Session revocation
//! - `POST /main-task/blog-posts` - Post creation
//! - `GET /main-task/blog-posts` - Visible post listing

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
