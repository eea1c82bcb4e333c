use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::server::{config::Config, data::DemoDataset, router::router, state::AppState};

fn demo_state() -> AppState {
    let config = Config {
        port: 8000,
        database_url: None,
        database_name: None,
    };

    AppState::new(Arc::new(DemoDataset::demo().unwrap()), None, &config)
}

async fn get(state: AppState, uri: &str) -> Response {
    router()
        .with_state(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests the landing endpoint.
///
/// Expected: 200 with the fixed greeting message.
#[tokio::test]
async fn root_reports_running() {
    let response = get(demo_state(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Gamification Demo API running");
}

/// Tests the health endpoint.
///
/// Expected: 200 with status ok, demo mode and the API version.
#[tokio::test]
async fn health_reports_demo_mode() {
    let response = get(demo_state(), "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mode"], "demo");
    assert_eq!(body["version"], "1.0");
}

/// Tests the leaderboard listing.
///
/// Expected: 200 with 4 entries, rank 1 holding 18250 points and rank 4
/// holding 13320.
#[tokio::test]
async fn leaderboard_returns_four_ordered_entries() {
    let response = get(demo_state(), "/api/demo/leaderboard").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body.as_array().unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["points"], 18250);
    assert_eq!(entries[3]["rank"], 4);
    assert_eq!(entries[3]["points"], 13320);
}

/// Tests the badge listing.
///
/// Expected: 200 with 3 badges including b_hero colored #F59E0B.
#[tokio::test]
async fn badges_include_hero() {
    let response = get(demo_state(), "/api/demo/badges").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let badges = body.as_array().unwrap();

    assert_eq!(badges.len(), 3);

    let hero = badges.iter().find(|b| b["id"] == "b_hero").unwrap();
    assert_eq!(hero["color"], "#F59E0B");
}

/// Tests the summary endpoint for a listed user.
///
/// Expected: 200 with the embedded user record matching the listing.
#[tokio::test]
async fn user_summary_embeds_listed_user() {
    let state = demo_state();

    let users = body_json(get(state.clone(), "/api/demo/users").await).await;
    let listed = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "u_001")
        .unwrap()
        .clone();

    let response = get(state, "/api/demo/user/u_001").await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(response).await;
    assert_eq!(summary["user"], listed);
    assert_eq!(summary["streak_days"], 8);
}

/// Tests the summary endpoint for an id outside the dataset.
///
/// Expected: 404 with the fixed not-found message.
#[tokio::test]
async fn unknown_user_summary_is_404() {
    let response = get(demo_state(), "/api/demo/user/u_999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "User not found in demo dataset");
}

/// Tests the award endpoint.
///
/// Verifies the fixed receipt and that the user listing is identical before
/// and after the call.
///
/// Expected: 200 with the demo-mode receipt; listings unchanged.
#[tokio::test]
async fn award_acknowledges_without_changes() {
    let state = demo_state();

    let before = body_json(get(state.clone(), "/api/demo/users").await).await;

    let response = router()
        .with_state(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/demo/award")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"action":"test","points":50}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let receipt = body_json(response).await;
    assert_eq!(receipt["mode"], "demo");
    assert_eq!(receipt["message"], "Read-only demo: no data was changed.");

    let after = body_json(get(state, "/api/demo/users").await).await;
    assert_eq!(before, after);
}

/// Tests the diagnostics endpoint without a database module installed.
///
/// Expected: 200 with the module-not-found marker and unset env flags.
#[tokio::test]
async fn diagnostics_report_missing_module() {
    let response = get(demo_state(), "/test").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Database module not found");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], Value::Array(vec![]));
}
