/// Integration tests for the Taskboard API
///
/// These tests drive the full router over a fresh in-memory database:
/// - User CRUD with slug derivation and uniqueness
/// - Task CRUD with the owner-existence check on creation
/// - Cascade deletion of a user's tasks
/// - Fixed 404 messages and acknowledgment bodies
/// - Payload validation

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_welcome() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Taskmanager");
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_create_user_then_get_by_id() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "username": "Jane Doe",
                "firstname": "Jane",
                "lastname": "Doe",
                "age": 34,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["transaction"], "Successful");

    let (status, user) = ctx.request("GET", "/user/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "Jane Doe");
    assert_eq!(user["slug"], "jane-doe");
}

#[tokio::test]
async fn test_list_users() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("GET", "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    ctx.create_user("alice").await;
    ctx.create_user("bob").await;

    let (status, body) = ctx.request("GET", "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_endpoints_resolve_at_trailing_slash_paths() {
    let ctx = TestContext::new().await.unwrap();

    // The documented list paths are /user/ and /task/, slash included.
    let (status, body) = ctx.request("GET", "/user/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());

    let (status, body) = ctx.request("GET", "/task/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("GET", "/user/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User was not found");
}

#[tokio::test]
async fn test_duplicate_username_is_409() {
    let ctx = TestContext::new().await.unwrap();
    ctx.create_user("alice").await;

    let (status, body) = ctx
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "username": "alice",
                "firstname": "Alice",
                "lastname": "Again",
                "age": 40,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_create_user_validation_failure_is_422() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request(
            "POST",
            "/user/create",
            Some(json!({
                "username": "",
                "firstname": "No",
                "lastname": "Name",
                "age": 30,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "username");
}

#[tokio::test]
async fn test_update_user_keeps_username_and_slug() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = ctx.create_user("Jane Doe").await;

    let payload = json!({
        "firstname": "Janet",
        "lastname": "Doe-Smith",
        "age": 35,
    });

    let (status, body) = ctx
        .request(
            "PUT",
            &format!("/user/update/{user_id}"),
            Some(payload.clone()),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["transaction"], "User update is successful!");

    // Idempotent: applying the same payload twice yields the same state.
    let (status, _) = ctx
        .request("PUT", &format!("/user/update/{user_id}"), Some(payload))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = ctx.request("GET", &format!("/user/{user_id}"), None).await;
    assert_eq!(user["firstname"], "Janet");
    assert_eq!(user["username"], "Jane Doe");
    assert_eq!(user["slug"], "jane-doe");
}

#[tokio::test]
async fn test_update_missing_user_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request(
            "PUT",
            "/user/update/42",
            Some(json!({
                "firstname": "No",
                "lastname": "Body",
                "age": 1,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User was not found");
}

#[tokio::test]
async fn test_user_tasks_empty_list_is_ok() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = ctx.create_user("alice").await;

    let (status, body) = ctx
        .request("GET", &format!("/user/{user_id}/tasks"), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_user_tasks_for_missing_user_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("GET", "/user/999/tasks", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User was not found");
}

#[tokio::test]
async fn test_create_task_for_missing_user_persists_nothing() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request(
            "POST",
            "/task/create?user_id=999",
            Some(json!({
                "title": "Buy milk",
                "content": "Two liters",
                "priority": 1,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User was not found");

    let (status, tasks) = ctx.request("GET", "/task/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_create_task_without_user_id_param_is_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let (status, _) = ctx
        .request(
            "POST",
            "/task/create",
            Some(json!({
                "title": "Buy milk",
                "content": "Two liters",
                "priority": 1,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_task_lifecycle() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = ctx.create_user("alice").await;
    let task_id = ctx.create_task(user_id, "Buy milk").await;

    let (status, task) = ctx.request("GET", &format!("/task/{task_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["user_id"], user_id);

    let payload = json!({
        "title": "Buy oat milk",
        "content": "One liter",
        "priority": 3,
    });

    let (status, body) = ctx
        .request(
            "PUT",
            &format!("/task/update/{task_id}"),
            Some(payload.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"], "Task update is successful!");

    // Idempotent second update.
    let (status, _) = ctx
        .request("PUT", &format!("/task/update/{task_id}"), Some(payload))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, task) = ctx.request("GET", &format!("/task/{task_id}"), None).await;
    assert_eq!(task["title"], "Buy oat milk");
    assert_eq!(task["user_id"], user_id);

    let (status, body) = ctx
        .request("DELETE", &format!("/task/delete/{task_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"], "Task deletion is successful!");

    let (status, body) = ctx.request("GET", &format!("/task/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task was not found");
}

#[tokio::test]
async fn test_update_missing_task_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .request(
            "PUT",
            "/task/update/5",
            Some(json!({
                "title": "Ghost",
                "content": "Does not exist",
                "priority": 0,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task was not found");
}

#[tokio::test]
async fn test_delete_missing_task_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("DELETE", "/task/delete/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task was not found");
}

#[tokio::test]
async fn test_delete_user_cascades_to_tasks() {
    let ctx = TestContext::new().await.unwrap();
    let user_id = ctx.create_user("alice").await;
    let task_id = ctx.create_task(user_id, "Buy milk").await;

    let (status, body) = ctx
        .request("DELETE", &format!("/user/delete/{user_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction"], "User deletion is successful!");

    let (status, _) = ctx.request("GET", &format!("/task/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, tasks) = ctx.request("GET", "/task/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_delete_missing_user_is_404() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.request("DELETE", "/user/delete/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User was not found");
}
