#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use kv_shortener::application::services::access_service::hash_password;
use kv_shortener::config::Config;
use kv_shortener::domain::clock::{Clock, ManualClock};
use kv_shortener::domain::error::{StoreError, StoreResult};
use kv_shortener::domain::store::KvStore;
use kv_shortener::infrastructure::store::MemoryStore;
use kv_shortener::routes::build_router;
use kv_shortener::state::AppState;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "letmein";
pub const BASE_URL: &str = "https://s.example.com";

pub fn test_config() -> Config {
    Config {
        public_base_url: Some(BASE_URL.to_string()),
        stats_password_hash: Some(hash_password(TEST_PASSWORD)),
        session_secret: Some("test-session-secret".to_string()),
        ..Config::default()
    }
}

pub fn start_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
    ))
}

/// Application wired on an in-memory store with simulated time.
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(test_config())
}

pub fn spawn_app_with(config: Config) -> TestApp {
    let clock = start_clock();
    let store = Arc::new(MemoryStore::new(clock.clone()));
    build_app(config, store, clock)
}

/// Like [`spawn_app`], but the store evicts on its own frozen clock so that
/// expired records stay readable and lazy expiration can be observed.
pub fn spawn_app_with_lagging_store() -> TestApp {
    let clock = start_clock();
    let store_clock: Arc<dyn Clock> = Arc::new(ManualClock::new(clock.now()));
    let store = Arc::new(MemoryStore::new(store_clock));
    build_app(test_config(), store, clock)
}

fn build_app(config: Config, store: Arc<MemoryStore>, clock: Arc<ManualClock>) -> TestApp {
    let state = AppState::new(store.clone(), clock.clone(), &config);
    let server = TestServer::new(build_router(state.clone())).unwrap();

    TestApp {
        server,
        state,
        store,
        clock,
    }
}

pub fn spawn_app_on(store: Arc<dyn KvStore>) -> TestServer {
    let state = AppState::new(store, start_clock(), &test_config());
    TestServer::new(build_router(state)).unwrap()
}

/// Logs in through `/validate` and returns the `Cookie` header value.
pub async fn login(server: &TestServer) -> String {
    let response = server
        .post("/validate")
        .json(&serde_json::json!({ "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), 302);

    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Store whose backend is unreachable.
pub struct DownStore;

#[async_trait]
impl KvStore for DownStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
