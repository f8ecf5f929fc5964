//! Blog Posts Module
//!
//! Posts tagged with an owner and a visibility tier, and the handlers that
//! create and list them.
//!
//! # Architecture
//!
//! - **`store`** - `ContentStore`: insertion-ordered posts and the
//!   visibility-filtered listing
//! - **`handlers`** - HTTP handlers for `/main-task/blog-posts`
//!
//! # Example
//!
//! ```rust
//! use postgate::backend::posts::store::ContentStore;
//! use postgate::shared::Visibility;
//!
//! let mut store = ContentStore::new();
//! store
//!     .create("alice", "p1".into(), "Hello".into(), "First post".into(), Visibility::Private)
//!     .unwrap();
//!
//! assert_eq!(store.list_visible(Some("alice")).len(), 1);
//! assert!(store.list_visible(Some("bob")).is_empty());
//! assert!(store.list_visible(None).is_empty());
//! ```

/// Post storage and visibility filtering
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::ContentStore;
pub use handlers::{create_post, list_posts, CreatePostRequest};
