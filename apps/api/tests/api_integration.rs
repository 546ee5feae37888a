//! End-to-end API tests against the in-memory backed router.
//!
//! Exercise the HTTP adapter: request shapes, status codes per the error
//! taxonomy, and JSON payloads of the views.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

use chessleague_api::api::{self, AppState};
use chessleague_api::auth::BcryptPasswordHasher;
use chessleague_api::infrastructure::repositories::memory::{
    MemoryClubRepository, MemoryDivisionRepository, MemorySeasonRepository, MemoryTeamRepository,
    MemoryUserRepository,
};

fn setup_app() -> Router {
    let state = AppState::new(
        Arc::new(MemorySeasonRepository::new()),
        Arc::new(MemoryDivisionRepository::new()),
        Arc::new(MemoryClubRepository::new()),
        Arc::new(MemoryTeamRepository::new()),
        Arc::new(MemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
    );
    api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn health_check() {
    let app = setup_app();
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn club_creation_and_listing() {
    let app = setup_app();

    let (status, body) =
        send(&app, "POST", "/api/clubs", Some(json!({"name": "club1"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "club1");
    assert_eq!(body["active"], true);

    // Duplicate is a conflict
    let (status, body) =
        send(&app, "POST", "/api/clubs", Some(json!({"name": "club1"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().expect("message").contains("club1"));

    send(&app, "POST", "/api/clubs", Some(json!({"name": "club0"}))).await;

    let (status, body) = send(&app, "GET", "/api/clubs", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["club0", "club1"]);
}

#[tokio::test]
async fn team_creation_flow() {
    let app = setup_app();
    send(&app, "POST", "/api/clubs", Some(json!({"name": "club1"}))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/teams",
        Some(json!({"club_name": "club1", "number": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["number"], 1);
    assert_eq!(body["name"], "club1 1");
    assert_eq!(body["division"], Value::Null);

    // Duplicate (club, number) among available teams: conflict, message
    // carries both fields
    let (status, body) = send(
        &app,
        "POST",
        "/api/teams",
        Some(json!({"club_name": "club1", "number": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let message = body["error"].as_str().expect("message");
    assert!(message.contains("club1"));
    assert!(message.contains('1'));

    // Unknown club: not found
    let (status, _) = send(
        &app,
        "POST",
        "/api/teams",
        Some(json!({"club_name": "ghost", "number": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Batch fills up to 3 without duplicating number 1
    let (status, _) = send(
        &app,
        "POST",
        "/api/teams/batch",
        Some(json!({"club_name": "club1", "count": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", "/api/clubs/club1/teams", None).await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|t| t["number"].as_i64().expect("number"))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn division_grouping_and_team_listing() {
    let app = setup_app();
    send(&app, "POST", "/api/seasons", Some(json!({"name": "season1"}))).await;
    send(
        &app,
        "POST",
        "/api/divisions",
        Some(json!({"season_name": "season1", "name": "division2", "level": 2})),
    )
    .await;
    let (status, division) = send(
        &app,
        "POST",
        "/api/divisions",
        Some(json!({"season_name": "season1", "name": "division1", "level": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(division["season"]["name"], "season1");

    let (status, body) = send(&app, "GET", "/api/seasons/season1/divisions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"1": ["division1"], "2": ["division2"]}));

    // Unknown season: empty grouping, not an error
    let (status, body) = send(&app, "GET", "/api/seasons/unknown/divisions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    // Fresh division has no teams
    let id = division["id"].as_i64().expect("id");
    let (status, body) = send(&app, "GET", &format!("/api/divisions/{id}/teams"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["teams"], json!([]));

    // Division creation against a missing season: not found
    let (status, _) = send(
        &app,
        "POST",
        "/api/divisions",
        Some(json!({"season_name": "unknown", "name": "division1", "level": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_account_flow() {
    let app = setup_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"username": "admin", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"username": "admin", "password": "other"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/users/admin/password",
        Some(json!({"old_password": "secret", "new_password": "rotated"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Old credential no longer verifies
    let (status, _) = send(
        &app,
        "PUT",
        "/api/users/admin/password",
        Some(json!({"old_password": "secret", "new_password": "again"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Unknown user
    let (status, _) = send(
        &app,
        "PUT",
        "/api/users/ghost/password",
        Some(json!({"old_password": "a", "new_password": "b"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
