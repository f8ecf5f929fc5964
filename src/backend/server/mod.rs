//! Server Module
//!
//! Server initialization, configuration loading and shared state.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - Application creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `.env` and environment variables
//! 2. **State Creation**: empty credential store, session registry and
//!    content store
//! 3. **Router Creation**: routes and the tracing layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::load_config;
pub use init::create_app;
