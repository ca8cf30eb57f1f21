#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::application::services::LinkService;
use url_shortener::domain::repositories::{LinkStore, StoreError, StoreResult};
use url_shortener::infrastructure::store::MemoryLinkStore;
use url_shortener::routes::router;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://s.test/";

/// A store whose backend is always down.
pub struct UnavailableStore;

#[async_trait]
impl LinkStore for UnavailableStore {
    async fn save(&self, _code: &str, _original_url: &str) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn get(&self, _code: &str) -> StoreResult<String> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete(&self, _code: &str) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(Arc::new(LinkService::new(store, BASE_URL)))
}

pub fn memory_store() -> Arc<MemoryLinkStore> {
    Arc::new(MemoryLinkStore::new(Duration::from_secs(60)))
}

pub fn create_test_server(store: Arc<dyn LinkStore>) -> TestServer {
    TestServer::new(router(create_test_state(store))).unwrap()
}

/// Creates a link through the API and returns its code.
pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "original_url": url }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    short_url.strip_prefix(BASE_URL).unwrap().to_string()
}
