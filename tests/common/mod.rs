#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};
use redirect_service::api::routes::routes;
use redirect_service::application::services::ResolutionService;
use redirect_service::domain::entities::{ShortCode, UrlRecord};
use redirect_service::domain::repositories::UrlResolver;
use redirect_service::domain::resolution::ResolutionOutcome;
use redirect_service::infrastructure::cache::{CacheError, CacheResult, CacheService};
use redirect_service::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_TTL: Duration = Duration::from_secs(300);

pub fn create_test_record(code: &str, destination: &str) -> UrlRecord {
    UrlRecord {
        short_url_id: "101".to_string(),
        title: "Test link".to_string(),
        description: None,
        short_code: code.to_string(),
        destination_url: destination.to_string(),
        user_id: 1,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    }
}

/// In-memory cache that records writes and can be switched into failure modes.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, Duration)>>,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn insert_record(&self, record: &UrlRecord) {
        let key = format!("urlinfo:{}", record.short_code);
        self.insert_raw(&key, &serde_json::to_string(record).unwrap());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, Duration)> {
        self.writes.lock().unwrap().clone()
    }

    fn unreachable() -> CacheError {
        CacheError::ConnectionError("connection refused".to_string())
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::unreachable());
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.writes.lock().unwrap().push((key.to_string(), ttl));
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(Self::unreachable());
        }
        self.insert_raw(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::unreachable());
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.fail_get.load(Ordering::SeqCst)
    }
}

/// Upstream resolver returning a fixed outcome and counting calls.
pub struct StubResolver {
    outcome: ResolutionOutcome,
    calls: AtomicUsize,
}

impl StubResolver {
    pub fn new(outcome: ResolutionOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlResolver for StubResolver {
    async fn resolve(&self, _code: &ShortCode) -> ResolutionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub fn create_test_state(cache: Arc<InMemoryCache>, resolver: Arc<StubResolver>) -> AppState {
    let service = ResolutionService::new(cache.clone(), resolver, TEST_TTL);
    AppState::new(Arc::new(service), cache)
}

pub fn create_test_app(cache: Arc<InMemoryCache>, resolver: Arc<StubResolver>) -> Router {
    routes().with_state(create_test_state(cache, resolver))
}
