//! Integration tests for the HTTP API.
//!
//! These tests drive the full axum router in-process with
//! `tower::ServiceExt::oneshot`: request parsing, handler dispatch, error
//! mapping and JSON serialization, without binding a socket.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use voi_rust::db::repository::ZoneRepository;
use voi_rust::http::{create_router, AppState};
use voi_rust::services::AnalysisPolicy;

use support::{healthy_zone, saturated_zone, seeded_repository};

fn app() -> Router {
    let repo = seeded_repository(
        "venue-1",
        vec![saturated_zone("atrium"), healthy_zone("lobby")],
    );
    let state = AppState::new(
        Arc::new(repo) as Arc<dyn ZoneRepository>,
        AnalysisPolicy::default(),
    );
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_connected_repository() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "v1");
    assert_eq!(body["repository"], "connected");
}

#[tokio::test]
async fn test_get_recommendations_returns_ranked_report() {
    let response = app()
        .oneshot(get("/v1/venues/venue-1/recommendations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["venue_id"], "venue-1");
    assert_eq!(body["zones_analyzed"], 2);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    // Priority-ordered: the critical capacity rec leads.
    assert_eq!(recs[0]["id"], "capacity:atrium:increase_capacity");
    assert_eq!(recs[0]["priority"], "CRITICAL");
    assert_eq!(recs[1]["priority"], "HIGH");
    // Plans are off unless requested.
    assert!(body.get("plans").is_none());
}

#[tokio::test]
async fn test_get_recommendations_filters_and_plans_via_query() {
    let response = app()
        .oneshot(get(
            "/v1/venues/venue-1/recommendations?optimization_type=flow&include_plan=true",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["category"], "flow");
    assert!(body["plans"]["flow:atrium:bottleneck_relief"].is_object());
}

#[tokio::test]
async fn test_bad_filter_values_are_400() {
    let cases = [
        "/v1/venues/venue-1/recommendations?optimization_type=plumbing",
        "/v1/venues/venue-1/recommendations?priority=urgent",
    ];
    for uri in cases {
        let response = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = body_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_unknown_venue_is_404_with_error_body() {
    let response = app()
        .oneshot(get("/v1/venues/venue-9/recommendations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("venue-9"));
}

#[tokio::test]
async fn test_post_action_applies_and_echoes_state() {
    let response = app()
        .oneshot(post_json(
            "/v1/actions",
            json!({
                "action": "apply_capacity_optimization",
                "target_id": "lobby",
                "parameters": {"new_capacity": 140},
                "actor_id": "ops-3"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["action"], "apply_capacity_optimization");
    assert_eq!(body["result"], "APPLIED");
    assert_eq!(body["actor_id"], "ops-3");
}

#[tokio::test]
async fn test_post_unknown_action_is_400() {
    let response = app()
        .oneshot(post_json(
            "/v1/actions",
            json!({
                "action": "repaint_zone",
                "target_id": "lobby",
                "parameters": {},
                "actor_id": "ops-3"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNKNOWN_ACTION");
}

#[tokio::test]
async fn test_zone_action_history_roundtrip() {
    let router = app();

    let applied = router
        .clone()
        .oneshot(post_json(
            "/v1/actions",
            json!({
                "action": "apply_flow_optimization",
                "target_id": "atrium",
                "parameters": {"alert_thresholds": {"flow_imbalance": 0.15}},
                "actor_id": "ops-1"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(applied.status(), StatusCode::OK);

    let response = router
        .oneshot(get("/v1/zones/atrium/actions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["target_id"], "atrium");
    assert_eq!(body["total"], 1);
    assert_eq!(body["actions"][0]["action"], "apply_flow_optimization");
    assert_eq!(body["actions"][0]["state"], "APPLIED");

    // History for a zone with no executed actions is empty, not an error.
    let empty = app().oneshot(get("/v1/zones/lobby/actions")).await.unwrap();
    assert_eq!(empty.status(), StatusCode::OK);
    assert_eq!(body_json(empty).await["total"], 0);
}
