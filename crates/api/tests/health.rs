//! HTTP-level integration tests for the health endpoint and baseline
//! middleware behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

/// GET /health returns 200 with status "ok" when the database is reachable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// The health endpoint is mounted at the root, not under /api/v1.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_not_under_api_v1(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Unknown routes return 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_route(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Responses carry an x-request-id header set by the middleware stack.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    assert!(
        response.headers().contains_key("x-request-id"),
        "middleware must attach a request id"
    );
}
