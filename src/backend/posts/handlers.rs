/**
 * Blog Post Handlers
 *
 * - `POST /main-task/blog-posts` - create a post as the authenticated caller
 * - `GET /main-task/blog-posts` - list the posts the caller may read
 *
 * Listing never fails: a missing or dead token is served as an anonymous
 * caller and sees public posts only.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::BackendResult;
use crate::backend::middleware::{require, AuthUser, MaybeAuthUser, Payload};
use crate::backend::posts::store::ContentStore;
use crate::shared::{Post, SharedError, Visibility};

/// Post creation request
///
/// `postId` may be supplied by the caller; when omitted the server assigns
/// a UUID.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub visibility: Option<Visibility>,
}

/// Create post handler
///
/// # Errors
///
/// * `401 Unauthorized` - header missing or token not live, or the post id
///   belongs to another user
/// * `400 Bad Request` - empty or malformed body, missing title, content or
///   visibility, unknown visibility value
///
/// # Example Request
///
/// ```http
/// POST /main-task/blog-posts HTTP/1.1
/// Authorization: 5f0c8d1e-4a7b-4c3d-9e2f-1a6b7c8d9e0f
///
/// { "postId": "p-1", "title": "tit1", "content": "c1", "visibility": "public" }
/// ```
pub async fn create_post(
    State(posts): State<Arc<RwLock<ContentStore>>>,
    user: AuthUser,
    Payload(request): Payload<CreatePostRequest>,
) -> BackendResult<StatusCode> {
    let title = require(request.title, "title")?;
    let content = require(request.content, "content")?;
    let visibility = request
        .visibility
        .ok_or_else(|| SharedError::missing("visibility"))?;
    let post_id = request
        .post_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let post = posts
        .write()
        .await
        .create(&user.user_id, post_id, title, content, visibility)?;

    tracing::info!(
        "Post {} stored for user {} ({})",
        post.post_id,
        post.owner_id,
        post.visibility
    );

    Ok(StatusCode::CREATED)
}

/// List posts handler
///
/// Returns the posts visible to the caller in creation order.
pub async fn list_posts(
    State(posts): State<Arc<RwLock<ContentStore>>>,
    caller: MaybeAuthUser,
) -> Json<Vec<Post>> {
    let visible = posts.read().await.list_visible(caller.user_id());

    tracing::debug!(
        "Listing {} posts for {}",
        visible.len(),
        caller.user_id().unwrap_or("anonymous caller")
    );

    Json(visible)
}
