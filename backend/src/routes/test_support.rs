//! Helpers shared by the route test modules

use crate::config::AppConfig;
use crate::repositories::memory::{MemoryPostStore, MemorySessionStore, MemoryUserStore};
use crate::repositories::{SessionRecord, SessionStore, UserRecord, UserStore};
use crate::routes::create_router;
use crate::state::AppState;
use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Router backed by in-memory stores and default configuration
pub fn test_app() -> Router {
    create_router(test_state(AppConfig::default()))
}

/// Router with ownership enforcement turned on
pub fn test_app_with_ownership() -> Router {
    let mut config = AppConfig::default();
    config.posts.enforce_ownership = true;
    create_router(test_state(config))
}

fn test_state(config: AppConfig) -> AppState {
    AppState::new(
        Arc::new(MemoryUserStore::default()),
        Arc::new(MemorySessionStore::default()),
        Arc::new(MemoryPostStore::default()),
        config,
    )
}

/// Build a JSON request; the token goes into the Authorization header raw,
/// without a scheme prefix.
pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request through the router and decode the JSON response body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(json_request(method, uri, token, body))
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register a user through the router; returns (user_id, token)
pub async fn register_user(app: &Router, username: &str, password: &str) -> (Uuid, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {body}");
    let user_id = body["userId"].as_str().unwrap().parse().unwrap();
    let token = body["token"].as_str().unwrap().to_string();
    (user_id, token)
}

/// Session store whose lookups fail, for exercising the 500 mapping
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn create(&self, _user_id: Uuid, _token: &str) -> Result<SessionRecord> {
        bail!("connection reset by peer")
    }

    async fn find_by_token(&self, _token: &str) -> Result<Option<SessionRecord>> {
        bail!("connection reset by peer")
    }

    async fn delete(&self, _id: Uuid) -> Result<()> {
        bail!("connection reset by peer")
    }
}

/// User store whose lookups fail, for exercising the 500 mapping
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find(&self, _id: Uuid) -> Result<Option<UserRecord>> {
        bail!("connection reset by peer")
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>> {
        bail!("connection reset by peer")
    }

    async fn username_exists(&self, _username: &str) -> Result<bool> {
        bail!("connection reset by peer")
    }

    async fn register(&self, _username: &str, _password_hash: &str) -> Result<UserRecord> {
        bail!("connection reset by peer")
    }

    async fn update_favorite_book(
        &self,
        _id: Uuid,
        _favorite_book: Option<String>,
    ) -> Result<Option<UserRecord>> {
        bail!("connection reset by peer")
    }
}

/// Router whose user and session stores fail on every call
pub fn failing_app() -> Router {
    create_router(AppState::new(
        Arc::new(FailingUserStore),
        Arc::new(FailingSessionStore),
        Arc::new(MemoryPostStore::default()),
        AppConfig::default(),
    ))
}
