/**
 * Authentication Handler Types
 *
 * Request and response bodies for the registration, authentication and
 * logout endpoints. Request fields are optional so that an empty object
 * decodes and can be reported as missing input field by field.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// `userId` may be supplied by the caller; when omitted the server assigns
/// a UUID.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login used to authenticate later
    pub login: Option<String>,
    /// Password (hashed before storage)
    pub password: Option<String>,
    /// Opaque user identifier
    pub user_id: Option<String>,
}

/// Authentication request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AuthenticateRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

/// Authentication response
///
/// Carries the opaque session token to send back in the `Authorization`
/// header.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}
