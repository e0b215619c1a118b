//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (and DATABASE_SSL_MODE=disable for a
//!   local server without TLS)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;
use users_core::User;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = unique_payload();

    let response = server.post("/api/users", &payload).await.unwrap();
    let created: User = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.nombre, payload.nombre);
    assert_eq!(created.correo, payload.correo);

    let response = server
        .get(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
    let found: Option<User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    server
        .delete(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &unique_payload()).await.unwrap();
    let created: User = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/users/{}", created.id);

    let replacement = unique_payload();
    let response = server.put(&path, &replacement).await.unwrap();
    let updated: Option<User> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = updated.expect("updated record");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.nombre, replacement.nombre);
    assert_eq!(updated.correo, replacement.correo);

    let response = server.get(&path).await.unwrap();
    let found: Option<User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found, Some(updated));

    server.delete(&path).await.unwrap();
}

#[tokio::test]
async fn test_delete_then_get_returns_null() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &unique_payload()).await.unwrap();
    let created: User = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/users/{}", created.id);

    for _ in 0..2 {
        let response = server.delete(&path).await.unwrap();
        let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.message, "Usuario eliminado");
    }

    let response = server.get(&path).await.unwrap();
    let found: Option<User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_unknown_user_returns_null() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .put(&format!("/api/users/{}", i32::MAX), &unique_payload())
        .await
        .unwrap();
    let updated: Option<User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_list_includes_created_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &unique_payload()).await.unwrap();
    let created: User = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/users").await.unwrap();
    let users: Vec<User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.iter().filter(|u| u.id == created.id).count(), 1);

    server
        .delete(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_id_returns_store_error() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users/not-a-number").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(body.error.contains("invalid input syntax"), "{}", body.error);
}

#[tokio::test]
async fn test_create_with_missing_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &json!({})).await.unwrap();
    let created: User = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.nombre.is_none());
    assert!(created.correo.is_none());

    server
        .delete(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
}
