//! Tests for the server builder: settings injection, storage injection,
//! and the retention window flowing end to end

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use serde_json::json;
use tower::ServiceExt;
use txstats::{MemoryStore, ServerBuilder, Settings, StatisticsStore};

fn post_transaction(amount: &str, offset_secs: i64) -> Request<Body> {
    let body = json!({
        "amount": amount,
        "timestamp": (Utc::now() + Duration::seconds(offset_secs)).to_rfc3339(),
    });
    Request::builder()
        .method("POST")
        .uri("/transactions")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_default_builder_uses_sixty_second_window() {
    let (app, _) = ServerBuilder::new().start().unwrap();

    // 59 seconds old: still inside the default window
    let response = app.oneshot(post_transaction("1.00", -59)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_custom_retention_window_is_honored() {
    let mut settings = Settings::default();
    settings.statistics.retention_secs = 10;
    let (app, _) = ServerBuilder::new().with_settings(settings).start().unwrap();

    // 30 seconds old: stale under a 10s window
    let response = app
        .clone()
        .oneshot(post_transaction("1.00", -30))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(post_transaction("1.00", -5)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_non_positive_retention_is_rejected_at_startup() {
    let mut settings = Settings::default();
    settings.statistics.retention_secs = 0;

    assert!(ServerBuilder::new().with_settings(settings).start().is_err());
}

#[tokio::test]
async fn test_injected_storage_is_shared_with_the_router() {
    let store = MemoryStore::new();
    let (app, _) = ServerBuilder::with_storage(store.clone()).start().unwrap();

    let response = app.oneshot(post_transaction("7.77", -1)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The handler wrote through the same store instance
    assert_eq!(store.bucket_count(), 1);
    assert_eq!(store.reduce().count, 1);
}
