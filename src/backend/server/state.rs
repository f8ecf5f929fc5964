/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` owns the three stores, each behind its own lock:
 * - `CredentialStore` - registered users
 * - `SessionRegistry` - live session tokens
 * - `ContentStore` - blog posts
 *
 * Readers take a read guard and see a consistent snapshot; writers take the
 * write guard of the one store they change.
 *
 * # Example
 *
 * ```rust
 * use postgate::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let live = state.sessions.read().await.len();
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::auth::users::CredentialStore;
use crate::backend::posts::store::ContentStore;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Registered users and password hashes
    pub users: Arc<RwLock<CredentialStore>>,

    /// Live session tokens
    pub sessions: Arc<RwLock<SessionRegistry>>,

    /// Blog posts in creation order
    pub posts: Arc<RwLock<ContentStore>>,

    /// Configuration the state was built from
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create empty stores for the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            users: Arc::new(RwLock::new(CredentialStore::new())),
            sessions: Arc::new(RwLock::new(SessionRegistry::new())),
            posts: Arc::new(RwLock::new(ContentStore::new())),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<RwLock<CredentialStore>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<RwLock<SessionRegistry>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<RwLock<ContentStore>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
