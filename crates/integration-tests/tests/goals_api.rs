//! End-to-end tests of the goal routes against `PostgreSQL`.
//!
//! These tests require a running `PostgreSQL` database named by
//! `TEST_DATABASE_URL`. Run with:
//!
//! ```bash
//! cargo test -p todo-api-integration-tests -- --ignored
//! ```

use axum::http::{Method, StatusCode};
use serde_json::json;

use todo_api_integration_tests::TestContext;

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_empty_table() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.request(Method::GET, "/goals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_get_non_existent_goal() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.request(Method::GET, "/goal/9001", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Goal not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_create_goal() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .request(
            Method::POST,
            "/goal",
            Some(r#"{"name":"really bad goal", "description": "don't buy"}"#),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "really bad goal");
    assert_eq!(body["description"], "don't buy");
    assert_eq!(body["id"], 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_get_goal() {
    let ctx = TestContext::new().await;
    ctx.add_goals(1).await;

    let (status, body) = ctx.request(Method::GET, "/goal/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Some test goal name");
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_update_goal() {
    let ctx = TestContext::new().await;
    ctx.add_goals(1).await;

    let (_, original) = ctx.request(Method::GET, "/goal/1", None).await;

    let (status, updated) = ctx
        .request(
            Method::PUT,
            "/goal/1",
            Some(r#"{"name":"test goal - updated name","description":"updated"}"#),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], original["id"]);
    assert_ne!(updated["name"], original["name"]);
    assert_eq!(updated["name"], "test goal - updated name");
    assert_eq!(updated["description"], "updated");

    let (_, fetched) = ctx.request(Method::GET, "/goal/1", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_update_non_existent_goal() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .request(Method::PUT, "/goal/42", Some(r#"{"name":"ghost"}"#))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 42, "name": "ghost", "description": ""}));

    let (status, _) = ctx.request(Method::GET, "/goal/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_delete_goal() {
    let ctx = TestContext::new().await;
    ctx.add_goals(1).await;

    let (status, _) = ctx.request(Method::GET, "/goal/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = ctx.request(Method::DELETE, "/goal/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "success"}));

    let (status, _) = ctx.request(Method::GET, "/goal/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = ctx.request(Method::DELETE, "/goal/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "success"}));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_list_pagination() {
    let ctx = TestContext::new().await;
    ctx.add_goals(13).await;

    let (status, body) = ctx.request(Method::GET, "/goals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(10));

    let (_, body) = ctx.request(Method::GET, "/goals?start=10&count=10", None).await;
    let ids: Vec<i64> = body
        .as_array()
        .map(|goals| goals.iter().filter_map(|g| g["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![11, 12, 13]);

    let (_, body) = ctx.request(Method::GET, "/goals?start=-1&count=0", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(10));
}

#[tokio::test]
#[ignore = "requires PostgreSQL (TEST_DATABASE_URL)"]
async fn test_readiness() {
    let ctx = TestContext::new().await;

    let (status, _) = ctx.request(Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}
