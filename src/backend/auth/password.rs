/**
 * Password Hashing
 *
 * Thin wrappers around bcrypt. Every hash carries its own random salt and
 * the work factor it was produced with, so verification needs only the
 * stored string.
 *
 * The work factor is fixed per process (see `AppConfig::bcrypt_cost`) which
 * keeps hashing time bounded and predictable.
 */

use crate::backend::error::{BackendError, BackendResult};

/// Hash a password with bcrypt at the given cost
///
/// # Errors
///
/// Returns `StateError` if bcrypt rejects the cost or fails internally.
pub fn hash_password(password: &str, cost: u32) -> BackendResult<String> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::state(format!("password hashing failed: {}", e))
    })
}

/// Verify a password against a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch. A malformed stored hash is an internal
/// error, not a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> BackendResult<bool> {
    bcrypt::verify(password, password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::state(format!("password verification failed: {}", e))
    })
}
