/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /main-task/user.
 *
 * # Registration Process
 *
 * 1. Decode the body (empty body or `{}` is invalid input)
 * 2. Take `login` and `password`, assign a `userId` if none was sent
 * 3. Hash the password, then take the store lock only to append the user
 *
 * Duplicate logins are accepted; see `CredentialStore::register`.
 */

use axum::{
    extract::State,
    http::StatusCode,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::error::BackendResult;
use crate::backend::middleware::{require, Payload};
use crate::shared::AppConfig;

/// Register handler
///
/// # Returns
///
/// `201 Created` with an empty body
///
/// # Errors
///
/// * `400 Bad Request` - empty or malformed body, missing login or password
/// * `500 Internal Server Error` - password hashing failed
///
/// # Example Request
///
/// ```http
/// POST /main-task/user HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "userId": "0b4c6f3e-2f7e-4d6b-9d8e-4e1d7c2b9a10",
///   "login": "user1",
///   "password": "password"
/// }
/// ```
pub async fn register(
    State(users): State<Arc<RwLock<CredentialStore>>>,
    State(config): State<Arc<AppConfig>>,
    Payload(request): Payload<RegisterRequest>,
) -> BackendResult<StatusCode> {
    let login = require(request.login, "login")?;
    let password = require(request.password, "password")?;
    let user_id = request
        .user_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    tracing::info!("Register request for login: {}", login);

    let user = User::new(&login, &password, user_id, config.bcrypt_cost)?;
    let (login, user_id) = (user.login.clone(), user.user_id.clone());

    users.write().await.insert(user);

    tracing::info!("User registered: {} ({})", login, user_id);

    Ok(StatusCode::CREATED)
}
