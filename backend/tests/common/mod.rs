//! Shared test application harness
//!
//! Builds the full router over in-memory stores, so the integration suite
//! exercises the real middleware stack without a database.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use inkpost_backend::config::AppConfig;
use inkpost_backend::repositories::memory::{
    MemoryPostStore, MemorySessionStore, MemoryUserStore,
};
use inkpost_backend::routes::create_router;
use inkpost_backend::state::AppState;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(
            Arc::new(MemoryUserStore::default()),
            Arc::new(MemorySessionStore::default()),
            Arc::new(MemoryPostStore::default()),
            AppConfig::default(),
        );
        Self {
            router: create_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, uri, token, None).await
    }

    pub async fn put(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", token);
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
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
}
