/**
 * Authentication Extractors
 *
 * This module turns the `Authorization` header into explicit handler
 * parameters. The token is accepted either as `Bearer <token>` (scheme
 * matched case-insensitively) or as the raw token value.
 *
 * - `BearerToken` - the token string, without checking the registry
 * - `AuthUser` - a token that resolves to a live session (required)
 * - `MaybeAuthUser` - an optional `AuthUser`; missing or dead tokens yield
 *   an anonymous caller
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::auth::sessions::SessionRegistry;
use crate::backend::error::BackendError;

/// Read the session token from the `Authorization` header
///
/// Returns `None` when the header is missing, not valid UTF-8, or blank.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest,
        _ => value,
    }
    .trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Raw session token taken from the request headers
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("missing session token")
        })?;

        Ok(BearerToken(token.to_string()))
    }
}

/// Caller authenticated by a live session
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<RwLock<SessionRegistry>>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let sessions = Arc::<RwLock<SessionRegistry>>::from_ref(state);
        let user_id = sessions.read().await.resolve(&token).ok_or_else(|| {
            tracing::warn!("Rejected token that is not live");
            BackendError::unauthorized("token is not live")
        })?;

        Ok(AuthUser { user_id, token })
    }
}

/// Caller that may or may not be authenticated
#[derive(Clone, Debug)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    /// User id of the caller, `None` when anonymous
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.user_id.as_str())
    }
}

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    Arc<RwLock<SessionRegistry>>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}
