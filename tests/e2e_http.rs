// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;
use support::{FailingUserRepository, InMemoryUserRepository, make_test_router, sample_user};

const USERS: &str = "/api/v1/users";

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "content-type was {ct}");

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = make_test_router(Arc::new(InMemoryUserRepository::new(vec![])));

    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json.get("status").and_then(|v| v.as_str()), Some("ok"));
}

#[tokio::test]
async fn list_users_returns_empty_array() {
    let app = make_test_router(Arc::new(InMemoryUserRepository::new(vec![])));

    let resp = app.oneshot(get(USERS)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn list_users_preserves_repository_order() {
    let repo = InMemoryUserRepository::new(vec![
        sample_user(2, "bob"),
        sample_user(1, "alice"),
        sample_user(3, "carol"),
    ]);
    let app = make_test_router(Arc::new(repo));

    let resp = app.oneshot(get(USERS)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;

    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item.get("id").and_then(|v| v.as_i64()).unwrap())
        .collect();
    assert_eq!(ids, vec![2, 1, 3]);

    let first = &json.as_array().unwrap()[0];
    assert_eq!(
        first.get("username").and_then(|v| v.as_str()),
        Some("bob")
    );
    assert_eq!(first.get("role").and_then(|v| v.as_str()), Some("member"));
    assert_eq!(first.get("is_active").and_then(|v| v.as_bool()), Some(true));
}

#[tokio::test]
async fn repository_failure_surfaces_as_internal_error() {
    let app = make_test_router(Arc::new(FailingUserRepository));

    let resp = app.oneshot(get(USERS)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(
        json.get("message").and_then(|v| v.as_str()),
        Some("connection refused")
    );
}

#[tokio::test]
async fn get_user_returns_single_record() {
    let repo = InMemoryUserRepository::new(vec![sample_user(1, "alice"), sample_user(2, "bob")]);
    let app = make_test_router(Arc::new(repo));

    let resp = app.oneshot(get("/api/v1/users/2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json.get("username").and_then(|v| v.as_str()), Some("bob"));
}

#[tokio::test]
async fn unknown_user_returns_404() {
    let app = make_test_router(Arc::new(InMemoryUserRepository::new(vec![])));

    let resp = app.oneshot(get("/api/v1/users/41")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_positive_user_id_returns_400() {
    let app = make_test_router(Arc::new(InMemoryUserRepository::new(vec![])));

    let resp = app.oneshot(get("/api/v1/users/0")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
