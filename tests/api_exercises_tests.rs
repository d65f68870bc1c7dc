// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise endpoint validation tests against the offline app.
//!
//! Input validation runs before any database access, so bad requests
//! must come back as 400 even with no Firestore behind the app.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn post_exercise(app: axum::Router, user_id: &str, form: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(format!("/api/users/{}/exercises", user_id))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn error_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_add_exercise_requires_description() {
    let (app, _state) = common::create_test_app();

    let response = post_exercise(app, "abc", "duration=30").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert_eq!(json["error"], "bad_request");
    assert!(json["details"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn test_add_exercise_rejects_non_numeric_duration() {
    let (app, _state) = common::create_test_app();

    let response = post_exercise(app, "abc", "description=Running&duration=banana").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert_eq!(json["error"], "bad_request");
    assert!(json["details"].as_str().unwrap().contains("duration"));
}

#[tokio::test]
async fn test_add_exercise_rejects_malformed_date() {
    let (app, _state) = common::create_test_app();

    let response =
        post_exercise(app, "abc", "description=Running&duration=30&date=January+15th").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert_eq!(json["error"], "bad_request");
    assert!(json["details"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn test_add_exercise_empty_date_counts_as_absent() {
    let (app, _state) = common::create_test_app();

    // Validation passes (empty date means today) and the request reaches
    // the offline database, not the 400 path.
    let response = post_exercise(app, "abc", "description=Running&duration=30&date=").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = error_body(response).await;
    assert_eq!(json["error"], "database_error");
}

#[tokio::test]
async fn test_add_exercise_malformed_id_is_not_found() {
    let (app, _state) = common::create_test_app();

    // "%2E%2E" decodes to "..", which can never be a document ID. The guard
    // answers not-found before the offline database is touched.
    let response = post_exercise(app, "%2E%2E", "description=Running&duration=30").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = error_body(response).await;
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_get_logs_rejects_malformed_from() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc/logs?from=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert_eq!(json["error"], "bad_request");
    assert!(json["details"].as_str().unwrap().contains("'from'"));
}

#[tokio::test]
async fn test_get_logs_rejects_malformed_to() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc/logs?to=2024-99-99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert!(json["details"].as_str().unwrap().contains("'to'"));
}

#[tokio::test]
async fn test_get_logs_rejects_malformed_limit() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc/logs?limit=-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = error_body(response).await;
    assert!(json["details"].as_str().unwrap().contains("'limit'"));
}

#[tokio::test]
async fn test_get_logs_valid_params_reach_database() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/abc/logs?from=2024-01-01&to=2024-12-31&limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = error_body(response).await;
    assert_eq!(json["error"], "database_error");
}

#[tokio::test]
async fn test_get_logs_malformed_id_is_not_found() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/users/%2E%2E/logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = error_body(response).await;
    assert_eq!(json["error"], "not_found");
}
