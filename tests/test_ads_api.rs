mod helpers;

use adserve::config::LockMode;
use adserve::infrastructure::http::router::build_router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use helpers::*;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn get_ads_returns_all_rows_in_order() {
    let app = test_app(vec![ad(1, "A"), ad(2, "B")], LockMode::SingleShot);

    let (status, body) = get_json(app, "/ads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            {"id": 1, "title": "A"},
            {"id": 2, "title": "B"}
        ])
    );
}

#[tokio::test]
async fn get_ads_returns_empty_array_for_empty_table() {
    let app = test_app(vec![], LockMode::SingleShot);

    let (status, body) = get_json(app, "/ads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn repeated_gets_are_idempotent() {
    let rows = vec![ad(1, "A"), ad(2, "B")];
    let state = test_state(
        Arc::new(FakeAdsRepository::new(rows)),
        Arc::new(RecordingLocker::new()),
        Arc::new(InstantClock),
        LockMode::SingleShot,
    );

    let (_, first) = get_json(build_router(state.clone()), "/ads").await;
    let (_, second) = get_json(build_router(state), "/ads").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn transient_outage_is_absorbed_not_surfaced() {
    // First two fetches fail; the caller still gets a 200, just later.
    let state = test_state(
        Arc::new(FakeAdsRepository::failing_first(vec![ad(1, "A")], 2)),
        Arc::new(RecordingLocker::new()),
        Arc::new(InstantClock),
        LockMode::SingleShot,
    );

    let (status, body) = get_json(build_router(state), "/ads").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([{"id": 1, "title": "A"}]));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app(vec![], LockMode::SingleShot);
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
