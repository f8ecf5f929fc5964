//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A router built with a cheap bcrypt cost
//! - Request helpers driving the router through `tower::ServiceExt`
//! - Registration and login shortcuts

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use postgate::backend::server::create_app;
use postgate::shared::AppConfig;
use serde_json::Value;
use tower::ServiceExt;

/// Lowest bcrypt cost the config accepts, keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Build a fresh application with empty stores
pub fn test_app() -> Router {
    let config = AppConfig::builder()
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test config is valid");
    create_app(config)
}

/// Response status and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

/// Send one request through the router
///
/// `token` goes into the `Authorization` header verbatim, without a scheme.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        body: body.to_vec(),
    }
}

pub async fn post_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> TestResponse {
    send(app, Method::GET, uri, token, None).await
}

/// Register a user and assert it was accepted
pub async fn register_user(app: &Router, login: &str, password: &str, user_id: &str) {
    let response = post_json(
        app,
        "/main-task/user",
        None,
        serde_json::json!({ "userId": user_id, "login": login, "password": password }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

/// Log in and return the issued token
pub async fn login(app: &Router, login: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/main-task/authenticate",
        None,
        serde_json::json!({ "login": login, "password": password }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["token"]
        .as_str()
        .expect("token is a string")
        .to_string()
}

/// Post body in the wire format
pub fn post_body(post_id: &str, visibility: &str) -> Value {
    serde_json::json!({
        "postId": post_id,
        "title": format!("title of {}", post_id),
        "content": format!("content of {}", post_id),
        "visibility": visibility,
    })
}

/// Post ids in a listing response, in order
pub fn post_ids(listing: &Value) -> Vec<String> {
    listing
        .as_array()
        .expect("listing is an array")
        .iter()
        .map(|post| post["postId"].as_str().unwrap().to_string())
        .collect()
}
