/**
 * Session Registry
 *
 * This module issues, resolves and revokes opaque session tokens.
 *
 * A token is a random UUID v4 string bound to one user id. Sessions have two
 * states: issued (present in the registry) and revoked (removed). There is
 * no expiry. A user may hold any number of live sessions, and revoking one
 * leaves the others untouched.
 */

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};

/// In-memory registry of live sessions, keyed by token
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, String>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `user_id`
    ///
    /// The token never collides with a currently live token. Earlier tokens
    /// of the same user stay live.
    pub fn issue_token(&mut self, user_id: &str) -> String {
        loop {
            let token = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = self.sessions.entry(token.clone()) {
                slot.insert(user_id.to_string());
                return token;
            }
            tracing::warn!("Generated token collided with a live session, retrying");
        }
    }

    /// Resolve a token to the user id it is bound to
    ///
    /// Returns `None` for unknown or revoked tokens. Never mutates state.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.get(token).cloned()
    }

    /// Revoke a live token
    ///
    /// Returns the user id the session was bound to.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - the token is not live (unknown or already revoked)
    pub fn revoke(&mut self, token: &str) -> BackendResult<String> {
        self.sessions
            .remove(token)
            .ok_or_else(|| BackendError::unauthorized("token is not live"))
    }

    /// Number of live sessions held by `user_id`
    pub fn live_sessions(&self, user_id: &str) -> usize {
        self.sessions.values().filter(|owner| *owner == user_id).count()
    }

    /// Total number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
