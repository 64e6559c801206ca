//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_schema_and_owner(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["database"]["reachable"], true);
    assert_eq!(json["database"]["migrations_applied"], 2);
    assert_eq!(json["database"]["migrations_known"], 2);
    assert_eq!(json["collections_path"], "/collections");

    let (owner_id,): (i64,) = sqlx::query_as("SELECT id FROM users WHERE username = 'test-owner'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(json["owner"]["id"], owner_id);
    assert_eq!(json["owner"]["username"], "test-owner");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_stays_at_root_under_base_path(pool: PgPool) {
    let mut config = common::test_config();
    config.api_base_path = "/colors".to_string();
    let app = common::build_test_app_with(pool, config).await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["collections_path"], "/colors/collections");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_is_degraded_when_database_is_gone(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    pool.close().await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"]["reachable"], false);
    assert!(json["database"]["migrations_applied"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/collections")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PUT"),
        "Allow-Methods should contain PUT, got: {allow_methods}"
    );
}
