/**
 * Authenticate Handler
 *
 * This module implements the login handler for POST /main-task/authenticate.
 *
 * # Authentication Process
 *
 * 1. Look up the first user registered under the login
 * 2. Verify the password with bcrypt, after the store lock is released
 * 3. Issue a new session token; earlier sessions of the user stay live
 * 4. Return the token
 */

use axum::{
    extract::State,
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthenticateRequest, TokenResponse};
use crate::backend::error::BackendResult;
use crate::backend::middleware::{require, Payload};
use crate::backend::server::state::AppState;

/// Authenticate handler
///
/// # Errors
///
/// * `400 Bad Request` - empty or malformed body, missing login or password
/// * `404 Not Found` - no user is registered under the login
/// * `401 Unauthorized` - the password is wrong
///
/// # Example Response
///
/// ```json
/// { "token": "5f0c8d1e-4a7b-4c3d-9e2f-1a6b7c8d9e0f" }
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    Payload(request): Payload<AuthenticateRequest>,
) -> BackendResult<Json<TokenResponse>> {
    let login = require(request.login, "login")?;
    let password = require(request.password, "password")?;

    tracing::info!("Authenticate request for: {}", login);

    let user = state.users.read().await.lookup(&login);
    let user = user
        .and_then(|user| user.verify_password(&password).map(|()| user))
        .inspect_err(|e| tracing::warn!("Authentication failed for {}: {}", login, e))?;

    let mut sessions = state.sessions.write().await;
    let token = sessions.issue_token(&user.user_id);

    tracing::info!(
        "User authenticated: {} ({} live sessions)",
        user.login,
        sessions.live_sessions(&user.user_id)
    );

    Ok(Json(TokenResponse { token }))
}
