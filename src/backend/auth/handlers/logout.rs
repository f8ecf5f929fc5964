/**
 * Logout Handler
 *
 * This module implements POST /main-task/logout. It revokes exactly the
 * session whose token is sent in the `Authorization` header; other sessions
 * of the same user stay live.
 */

use axum::{
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::error::BackendResult;
use crate::backend::middleware::AuthUser;

/// Logout handler
///
/// # Errors
///
/// * `401 Unauthorized` - header missing, or the token is not live
///
/// The extractor has already resolved the token; revoking can still fail
/// if a concurrent logout removed it first.
pub async fn logout(
    State(sessions): State<Arc<RwLock<SessionRegistry>>>,
    user: AuthUser,
) -> BackendResult<StatusCode> {
    let mut registry = sessions.write().await;
    registry
        .revoke(&user.token)
        .inspect_err(|_| tracing::warn!("Token of user {} was revoked concurrently", user.user_id))?;

    tracing::info!(
        "Session revoked for user {} ({} still live)",
        user.user_id,
        registry.live_sessions(&user.user_id)
    );

    Ok(StatusCode::OK)
}
