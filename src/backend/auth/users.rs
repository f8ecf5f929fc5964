/**
 * Credential Store
 *
 * This module holds registered users and their bcrypt password hashes, and
 * verifies login attempts against them.
 *
 * Users are indexed by login. Duplicate logins are accepted and kept as
 * separate records in registration order; verification always uses the
 * first record registered under a login.
 *
 * bcrypt work happens on `User` values, outside the store. The store itself
 * only appends and looks up, so its lock is never held across a hash.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::SharedError;

/// A registered user
///
/// Created on registration and never mutated. The plaintext password is
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Opaque user identifier (caller-supplied or generated UUID)
    pub user_id: String,
    /// Login name used for lookup
    pub login: String,
    /// bcrypt hash of the password (salt and cost embedded)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user record, hashing `password` at `bcrypt_cost`
    ///
    /// Runs without touching any store, so callers hash before they lock.
    ///
    /// # Errors
    ///
    /// * `SharedError::ValidationError` - `login` or `password` is empty
    /// * `StateError` - hashing failed
    pub fn new(login: &str, password: &str, user_id: String, bcrypt_cost: u32) -> BackendResult<Self> {
        if login.is_empty() {
            return Err(SharedError::validation("login", "must not be empty").into());
        }
        if password.is_empty() {
            return Err(SharedError::validation("password", "must not be empty").into());
        }

        Ok(Self {
            user_id,
            login: login.to_string(),
            password_hash: hash_password(password, bcrypt_cost)?,
            created_at: Utc::now(),
        })
    }

    /// Check `password` against this user's stored hash
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - the password does not match
    /// * `StateError` - the stored hash could not be checked
    pub fn verify_password(&self, password: &str) -> BackendResult<()> {
        if !verify_password(password, &self.password_hash)? {
            return Err(BackendError::unauthorized(format!(
                "password mismatch for '{}'",
                self.login
            )));
        }
        Ok(())
    }
}

/// In-memory store of user credentials
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, Vec<User>>,
    count: usize,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already hashed user record
    ///
    /// A login that is already registered is accepted and stored as an
    /// additional record.
    pub fn insert(&mut self, user: User) {
        let records = self.users.entry(user.login.clone()).or_default();
        if !records.is_empty() {
            tracing::warn!(
                "Login '{}' registered again ({} records now share it)",
                user.login,
                records.len() + 1
            );
        }
        records.push(user);
        self.count += 1;
    }

    /// First user registered under `login`
    ///
    /// # Errors
    ///
    /// * `NotFound` - no user is registered under `login`
    pub fn lookup(&self, login: &str) -> BackendResult<User> {
        self.users
            .get(login)
            .and_then(|records| records.first())
            .cloned()
            .ok_or_else(|| BackendError::not_found(format!("no user registered as '{}'", login)))
    }

    /// Number of registered user records
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
