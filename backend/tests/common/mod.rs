//! Common test utilities for router-level tests
//!
//! Builds the full axum router over an in-process store and drives it with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use resource_hub_backend::api::{routes::create_router, AppState};
use resource_hub_backend::config::Config;
use resource_hub_backend::error::{AppError, Result};
use resource_hub_backend::models::{NewResource, Resource, ResourceStats};
use resource_hub_backend::services::query_engine::ResourceQuery;
use resource_hub_backend::storage::{MemoryStore, ResourceStore, SeedResource};

/// Test application holding the router and its store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn ResourceStore>,
}

impl TestApp {
    pub fn with_store(store: Arc<dyn ResourceStore>) -> Self {
        let state = Arc::new(AppState::new(Config::default(), store.clone()));
        Self {
            router: create_router(state),
            store,
        }
    }

    /// Router over the ten sample resources
    pub fn seeded() -> Self {
        Self::with_store(Arc::new(MemoryStore::seeded()))
    }

    pub fn empty() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, body).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

/// Titles from a JSON array of resources, in order
pub fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

/// Ids from a JSON array of resources, in order
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

/// Store whose every operation fails as an unreachable backend would
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T> {
    Err(AppError::Storage(
        "connection refused: postgres://hub:secret@db/hub".into(),
    ))
}

#[async_trait]
impl ResourceStore for UnavailableStore {
    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
    async fn list(&self, _: &ResourceQuery) -> Result<Vec<Resource>> {
        unavailable()
    }
    async fn get(&self, _: i64) -> Result<Option<Resource>> {
        unavailable()
    }
    async fn insert(&self, _: NewResource) -> Result<Resource> {
        unavailable()
    }
    async fn insert_seeded(&self, _: SeedResource) -> Result<Resource> {
        unavailable()
    }
    async fn increment_downloads(&self, _: i64) -> Result<()> {
        unavailable()
    }
    async fn stats(&self) -> Result<ResourceStats> {
        unavailable()
    }
    async fn count(&self) -> Result<i64> {
        unavailable()
    }
    async fn clear(&self) -> Result<()> {
        unavailable()
    }
    async fn ping(&self) -> Result<()> {
        unavailable()
    }
}
