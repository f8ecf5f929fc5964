/**
 * Content Store
 *
 * This module holds blog posts in creation order and answers
 * visibility-filtered listings.
 *
 * Posts are appended to a vector (which fixes listing order) and indexed by
 * post id. Posts are never mutated or removed once stored.
 */

use std::collections::HashMap;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::{Post, SharedError, Visibility};

/// In-memory store of posts
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
    by_id: HashMap<String, usize>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new post owned by `owner_id`
    ///
    /// Submitting a post id that the same owner already used is treated as a
    /// repeat of the original request: the stored post is returned unchanged
    /// and nothing is appended.
    ///
    /// # Errors
    ///
    /// * `SharedError::ValidationError` - `owner_id` or `post_id` is empty
    /// * `Unauthorized` - `post_id` already belongs to another user's post
    pub fn create(
        &mut self,
        owner_id: &str,
        post_id: String,
        title: String,
        content: String,
        visibility: Visibility,
    ) -> BackendResult<Post> {
        if owner_id.is_empty() {
            return Err(SharedError::validation("ownerId", "must not be empty").into());
        }
        if post_id.is_empty() {
            return Err(SharedError::validation("postId", "must not be empty").into());
        }

        if let Some(&index) = self.by_id.get(&post_id) {
            let existing = &self.posts[index];
            if existing.owner_id != owner_id {
                return Err(BackendError::unauthorized(format!(
                    "post id '{}' belongs to another user",
                    post_id
                )));
            }
            tracing::debug!("Post {} already stored, keeping original", post_id);
            return Ok(existing.clone());
        }

        let post = Post::new(post_id, owner_id.to_string(), title, content, visibility);
        self.by_id.insert(post.post_id.clone(), self.posts.len());
        self.posts.push(post.clone());

        Ok(post)
    }

    /// Posts readable by `caller`, in creation order
    ///
    /// * `None` (anonymous) - public posts only
    /// * `Some(user)` - public and authenticated posts, plus the user's own
    ///   private posts
    pub fn list_visible(&self, caller: Option<&str>) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.is_visible_to(caller))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
