/**
 * Post Data Structure
 *
 * This module defines the Post struct and the three-tier visibility policy
 * that decides which callers may read a post.
 *
 * Posts are shared between the content store (for storage and filtering) and
 * the HTTP layer (for JSON listing responses). Field names are serialized in
 * camelCase to match the public API.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visibility tier of a post
///
/// - `Public` - readable by anyone, including anonymous callers
/// - `Authenticated` - readable by any caller holding a live session
/// - `Private` - readable by the owner only
///
/// Serialized in lowercase (`"public"`, `"authenticated"`, `"private"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Authenticated,
    Private,
}

impl Visibility {
    /// Decide whether a post with this visibility, owned by `owner_id`,
    /// is readable by `caller`.
    ///
    /// `caller` is `None` for anonymous requests. The owner can always read
    /// their own posts, whatever the tier.
    pub fn visible_to(self, owner_id: &str, caller: Option<&str>) -> bool {
        match (self, caller) {
            (Visibility::Public, _) => true,
            (_, None) => false,
            (Visibility::Authenticated, Some(_)) => true,
            (Visibility::Private, Some(caller)) => caller == owner_id,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Authenticated => "authenticated",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single blog post
///
/// Created once through the content store and never mutated afterwards.
///
/// # Fields
/// * `post_id` - Opaque post identifier (caller-supplied or generated UUID)
/// * `owner_id` - Identifier of the user who created the post
/// * `title` - Post title
/// * `content` - Post body
/// * `visibility` - Visibility tier
/// * `created_at` - Creation time (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time
    pub fn new(
        post_id: String,
        owner_id: String,
        title: String,
        content: String,
        visibility: Visibility,
    ) -> Self {
        Self {
            post_id,
            owner_id,
            title,
            content,
            visibility,
            created_at: Utc::now(),
        }
    }

    /// Whether `caller` may read this post
    pub fn is_visible_to(&self, caller: Option<&str>) -> bool {
        self.visibility.visible_to(&self.owner_id, caller)
    }
}
