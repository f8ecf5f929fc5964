/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /main-task/user` - Register a user
 * - `POST /main-task/authenticate` - Log in, returns a session token
 * - `POST /main-task/logout` - Revoke the session token (requires token)
 *
 * ## Blog Posts
 * - `POST /main-task/blog-posts` - Create a post (requires token)
 * - `GET /main-task/blog-posts` - List visible posts (token optional)
 */

use axum::{routing::post, Router};

use crate::backend::auth::{authenticate, logout, register};
use crate::backend::posts::{create_post, list_posts};
use crate::backend::server::state::AppState;

/// Path prefix shared by all API routes
pub const API_PREFIX: &str = "/main-task";

/// Configure API routes
///
/// Authentication is checked by the handlers' extractors, so every route is
/// mounted the same way here.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let api = Router::new()
        .route("/user", post(register))
        .route("/authenticate", post(authenticate))
        .route("/logout", post(logout))
        .route("/blog-posts", post(create_post).get(list_posts));

    router.nest(API_PREFIX, api)
}
