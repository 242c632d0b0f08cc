mod common;

use axum_test::TestServer;
use common::{InMemoryCache, StubResolver, TEST_TTL, create_test_app};
use redirect_service::api::routes::routes;
use redirect_service::application::services::ResolutionService;
use redirect_service::domain::resolution::ResolutionOutcome;
use redirect_service::infrastructure::cache::{CacheService, NullCache};
use redirect_service::state::AppState;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;

fn server(cache: Arc<InMemoryCache>) -> TestServer {
    let resolver = Arc::new(StubResolver::new(ResolutionOutcome::NotFound));
    TestServer::new(create_test_app(cache, resolver)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_is_static() {
    let cache = Arc::new(InMemoryCache::new());
    cache.fail_get.store(true, Ordering::SeqCst);

    let response = server(cache).get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "service": "redirect-service" }));
}

#[tokio::test]
async fn test_readiness_healthy() {
    let response = server(Arc::new(InMemoryCache::new()))
        .get("/health/ready")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_readiness_degraded_when_cache_down() {
    let cache = Arc::new(InMemoryCache::new());
    cache.fail_get.store(true, Ordering::SeqCst);

    let response = server(cache).get("/health/ready").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
}

#[tokio::test]
async fn test_readiness_degraded_with_null_cache() {
    let cache: Arc<dyn CacheService> = Arc::new(NullCache::new());
    let resolver = Arc::new(StubResolver::new(ResolutionOutcome::NotFound));
    let service = ResolutionService::new(cache.clone(), resolver, TEST_TTL);
    let app = routes().with_state(AppState::new(Arc::new(service), cache));

    let response = TestServer::new(app).unwrap().get("/health/ready").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
}
