//! Integration tests for the human resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_form, post_json, test_pool};
use serde_json::json;

#[tokio::test]
async fn create_human_returns_integer_year_born() {
    let app = build_test_app(test_pool().await);
    let response = post_json(app, "/humans", json!({"name": "Sigourney Weaver", "year_born": "1949"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"id": 1, "name": "Sigourney Weaver", "year_born": 1949}));
}

// ---------------------------------------------------------------------------
// Test: the listing carries only id and name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_humans_omits_year_born() {
    let app = build_test_app(test_pool().await);
    post_json(app.clone(), "/humans", json!({"name": "Ada", "year_born": "1815"})).await;

    let response = get(app, "/humans").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"humans": [{"id": 1, "name": "Ada"}]}));
}

#[tokio::test]
async fn read_human_includes_year_born() {
    let app = build_test_app(test_pool().await);
    let created = body_json(post_form(app.clone(), "/humans", "name=Ada&year_born=1815").await).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/humans/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({"human": {"id": id, "name": "Ada", "year_born": 1815}}));
}

#[tokio::test]
async fn read_missing_human_returns_404() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/humans/7").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = build_test_app(test_pool().await);
    let response = get(app.clone(), "/humans/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "not_found");

    let response = get(app, "/humans/abc/movies").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_integer_year_born_is_rejected() {
    let app = build_test_app(test_pool().await);
    let response = post_json(app.clone(), "/humans", json!({"name": "Ada", "year_born": "eighteen"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["details"]["field"], "year_born");

    let listing = body_json(get(app, "/humans").await).await;
    assert_eq!(listing["humans"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_year_born_is_rejected() {
    let app = build_test_app(test_pool().await);
    let response = post_json(app, "/humans", json!({"name": "Ada"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "year_born is required");
}

// ---------------------------------------------------------------------------
// Test: concurrent identical creates both succeed with distinct ids
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_identical_humans_get_distinct_ids() {
    let app = build_test_app(test_pool().await);
    let body = json!({"name": "Twin", "year_born": "1990"});

    let (a, b) = tokio::join!(
        post_json(app.clone(), "/humans", body.clone()),
        post_json(app.clone(), "/humans", body.clone()),
    );
    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::OK);

    let a = body_json(a).await;
    let b = body_json(b).await;
    assert_ne!(a["id"], b["id"]);

    let listing = body_json(get(app, "/humans").await).await;
    assert_eq!(listing["humans"].as_array().unwrap().len(), 2);
}
