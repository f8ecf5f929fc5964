//! Blog post API integration tests
//!
//! Tests for post creation and for the visibility rules applied to
//! listings.

use axum::http::StatusCode;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::{get, login, post_body, post_ids, post_json, register_user, test_app};

const POSTS: &str = "/main-task/blog-posts";

/// Two users; user1 owns one post of each visibility tier.
async fn seeded_app() -> (Router, String, String) {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    register_user(&app, "user2", "password2", "id-2").await;
    let token1 = login(&app, "user1", "password1").await;
    let token2 = login(&app, "user2", "password2").await;

    for (post_id, visibility) in [
        ("p-public", "public"),
        ("p-auth", "authenticated"),
        ("p-private", "private"),
    ] {
        let response = post_json(&app, POSTS, Some(&token1), post_body(post_id, visibility)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    (app, token1, token2)
}

#[tokio::test]
async fn test_create_post_empty_body_is_bad_request() {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    let token = login(&app, "user1", "password1").await;

    let response = post_json(&app, POSTS, Some(&token), json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_unknown_visibility_is_bad_request() {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    let token = login(&app, "user1", "password1").await;

    let response = post_json(&app, POSTS, Some(&token), post_body("p-1", "friends")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_invalid_token_is_unauthorized() {
    let app = test_app();
    let token = Uuid::new_v4().to_string();

    let response = post_json(&app, POSTS, Some(&token), post_body("p-1", "public")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_without_header_is_unauthorized() {
    let app = test_app();

    let response = post_json(&app, POSTS, None, post_body("p-1", "public")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_with_revoked_token_is_unauthorized() {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    let token = login(&app, "user1", "password1").await;
    let response = post_json(&app, "/main-task/logout", Some(&token), json!({})).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = post_json(&app, POSTS, Some(&token), post_body("p-1", "public")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_without_post_id_assigns_one() {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    let token = login(&app, "user1", "password1").await;

    let response = post_json(
        &app,
        POSTS,
        Some(&token),
        json!({ "title": "t", "content": "c", "visibility": "public" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let listing = get(&app, POSTS, None).await.json();
    let ids = post_ids(&listing);
    assert_eq!(ids.len(), 1);
    assert!(Uuid::parse_str(&ids[0]).is_ok());
}

#[tokio::test]
async fn test_repeated_post_id_from_owner_is_not_duplicated() {
    let (app, token1, _) = seeded_app().await;

    let response = post_json(&app, POSTS, Some(&token1), post_body("p-public", "public")).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let listing = get(&app, POSTS, Some(&token1)).await.json();
    assert_eq!(post_ids(&listing), vec!["p-public", "p-auth", "p-private"]);
}

#[tokio::test]
async fn test_post_id_owned_by_other_user_is_unauthorized() {
    let (app, _, token2) = seeded_app().await;

    let response = post_json(&app, POSTS, Some(&token2), post_body("p-public", "public")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_owner_sees_all_own_posts() {
    let (app, token1, _) = seeded_app().await;

    let response = get(&app, POSTS, Some(&token1)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        post_ids(&response.json()),
        vec!["p-public", "p-auth", "p-private"]
    );
}

#[tokio::test]
async fn test_other_user_sees_public_and_authenticated() {
    let (app, _, token2) = seeded_app().await;

    let response = get(&app, POSTS, Some(&token2)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(post_ids(&response.json()), vec!["p-public", "p-auth"]);
}

#[tokio::test]
async fn test_anonymous_sees_public_only() {
    let (app, _, _) = seeded_app().await;

    let response = get(&app, POSTS, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(post_ids(&response.json()), vec!["p-public"]);
}

#[tokio::test]
async fn test_dead_token_lists_as_anonymous() {
    let (app, _, _) = seeded_app().await;
    let token = Uuid::new_v4().to_string();

    let response = get(&app, POSTS, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(post_ids(&response.json()), vec!["p-public"]);
}

#[tokio::test]
async fn test_listing_serializes_wire_fields() {
    let (app, _, _) = seeded_app().await;

    let listing = get(&app, POSTS, None).await.json();
    let post = &listing[0];

    assert_eq!(post["postId"], "p-public");
    assert_eq!(post["ownerId"], "id-1");
    assert_eq!(post["title"], "title of p-public");
    assert_eq!(post["content"], "content of p-public");
    assert_eq!(post["visibility"], "public");
    assert!(post["createdAt"].is_string());
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let app = test_app();

    let response = get(&app, POSTS, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

/// Full client session: two users, two sessions for user1, one of them
/// logged out, then three posts and the three listings.
#[tokio::test]
async fn test_reference_flow() {
    let app = test_app();
    register_user(&app, "user1", "password1", "id-1").await;
    register_user(&app, "user2", "password2", "id-2").await;

    let first = login(&app, "user1", "password1").await;
    let second = login(&app, "user1", "password1").await;
    assert_ne!(first, second);
    let user2 = login(&app, "user2", "password2").await;

    let response = post_json(&app, "/main-task/logout", Some(&second), json!({})).await;
    assert_eq!(response.status, StatusCode::OK);

    // The surviving session can still publish
    let response = post_json(&app, POSTS, Some(&first), post_body("a", "public")).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = post_json(&app, "/main-task/logout", Some(&second), json!({})).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = post_json(&app, POSTS, Some(&first), json!({})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = post_json(
        &app,
        POSTS,
        Some(&Uuid::new_v4().to_string()),
        post_body("a", "public"),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    for (post_id, visibility) in [("a", "public"), ("b", "private"), ("c", "authenticated")] {
        let response = post_json(&app, POSTS, Some(&first), post_body(post_id, visibility)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let owner = get(&app, POSTS, Some(&first)).await;
    assert_eq!(owner.status, StatusCode::OK);
    assert_eq!(post_ids(&owner.json()), vec!["a", "b", "c"]);

    let other = get(&app, POSTS, Some(&user2)).await;
    assert_eq!(other.status, StatusCode::OK);
    assert_eq!(post_ids(&other.json()), vec!["a", "c"]);

    let anonymous = get(&app, POSTS, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(post_ids(&anonymous.json()), vec!["a"]);
}
