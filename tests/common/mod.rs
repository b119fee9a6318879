#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum_test::TestServer;
use redirect_resolver::domain::{RedirectStatus, RedirectStore, StoreError};
use redirect_resolver::infrastructure::store::MemoryStore;
use redirect_resolver::routes::app_router;
use redirect_resolver::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Store whose lookups always fail, as if the backend were unreachable.
pub struct FailingStore;

#[async_trait]
impl RedirectStore for FailingStore {
    async fn lookup(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

/// Wraps a store and counts lookups.
pub struct CountingStore<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl<S: RedirectStore> RedirectStore for CountingStore<S> {
    async fn lookup(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(key).await
    }
}

pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_entry("/old-page", "https://example.com/new")
        .with_entry("/docs", "https://docs.example.com/guide?lang=en#intro")
        .with_entry("/docs/", "https://docs.example.com/trailing")
        .with_entry("/broken", "not a url")
        .with_entry("/relative", "/somewhere/else")
        .with_entry("/shouty", "HTTPS://EXAMPLE.COM")
        .with_entry("/caf%C3%A9", "https://example.com/cafe")
        .with_entry("/a%7Bb%7D", "https://example.com/braces")
}

pub fn create_test_router(store: impl RedirectStore + 'static, status: RedirectStatus) -> Router {
    app_router(AppState::new(Arc::new(store), status))
}

pub fn create_test_server(store: impl RedirectStore + 'static, status: RedirectStatus) -> TestServer {
    TestServer::new(create_test_router(store, status)).unwrap()
}

/// Sends a GET with the request target exactly as given, bypassing any
/// client-side URL cleanup.
pub async fn raw_get(router: Router, target: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(target)
        .body(Body::empty())
        .unwrap();
    router.oneshot(request).await.unwrap()
}

pub fn default_server() -> TestServer {
    create_test_server(sample_store(), RedirectStatus::DEFAULT)
}
