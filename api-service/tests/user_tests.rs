mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "pass_word!",
            "full_name": "Nicola Example"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["full_name"], "Nicola Example");
    assert_eq!(body["data"]["is_active"], true);
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // The digest never leaves the server.
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "nicola",
            "email": "different@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "nicola2",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "n",
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "nicola",
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_create_user_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/users")
        .json(&json!({
            "username": "nicola",
            "email": "nicola@example.com",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("Password too short"));
}

#[tokio::test]
async fn test_list_users_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_paginated() {
    let app = TestApp::spawn().await;

    for i in 0..5 {
        app.register_user(
            &format!("user{}", i),
            &format!("user{}@example.com", i),
            "pass_word!",
        )
        .await;
    }
    let token = app.login("user0", "pass_word!").await;

    let response = app
        .get_authenticated("/api/v1/users?skip=1&limit=2", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola", "pass_word!").await;

    let response = app
        .get_authenticated(&format!("/api/v1/users/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], user_id);
    assert_eq!(body["data"]["username"], "nicola");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = TestApp::spawn().await;

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola", "pass_word!").await;

    let response = app
        .get_authenticated(
            "/api/v1/users/00000000-0000-0000-0000-000000000000",
            &token,
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_own_user() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola", "pass_word!").await;

    let response = app
        .put_authenticated(&format!("/api/v1/users/{}", user_id), &token)
        .json(&json!({
            "full_name": "Nicola Renamed",
            "email": "renamed@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["full_name"], "Nicola Renamed");
    assert_eq!(body["data"]["email"], "renamed@example.com");
    assert_eq!(body["data"]["username"], "nicola");
}

#[tokio::test]
async fn test_update_password_allows_new_login() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register_user("nicola", "nicola@example.com", "old_password!")
        .await;
    let token = app.login("nicola", "old_password!").await;

    let response = app
        .put_authenticated(&format!("/api/v1/users/{}", user_id), &token)
        .json(&json!({ "password": "new_password!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Old password is gone, new one works.
    let old_login = app
        .post("/api/v1/auth/login")
        .json(&json!({ "username": "nicola", "password": "old_password!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(old_login.status(), StatusCode::UNAUTHORIZED);

    app.login("nicola", "new_password!").await;
}

#[tokio::test]
async fn test_update_other_user_forbidden() {
    let app = TestApp::spawn().await;

    let target_id = app
        .register_user("target", "target@example.com", "pass_word!")
        .await;
    app.register_user("intruder", "intruder@example.com", "pass_word!")
        .await;
    let token = app.login("intruder", "pass_word!").await;

    let response = app
        .put_authenticated(&format!("/api/v1/users/{}", target_id), &token)
        .json(&json!({ "full_name": "Hijacked" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Not enough permissions");
}

#[tokio::test]
async fn test_superuser_can_update_other_user() {
    let app = TestApp::spawn().await;

    let target_id = app
        .register_user("target", "target@example.com", "pass_word!")
        .await;
    app.seed_user("admin", "admin_pass!", true, true).await;
    let token = app.login("admin", "admin_pass!").await;

    let response = app
        .put_authenticated(&format!("/api/v1/users/{}", target_id), &token)
        .json(&json!({ "is_active": false }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["is_active"], false);
}

#[tokio::test]
async fn test_delete_own_user() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola", "pass_word!").await;

    let response = app
        .delete_authenticated(&format!("/api/v1/users/{}", user_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_other_user_forbidden() {
    let app = TestApp::spawn().await;

    let target_id = app
        .register_user("target", "target@example.com", "pass_word!")
        .await;
    app.register_user("intruder", "intruder@example.com", "pass_word!")
        .await;
    let token = app.login("intruder", "pass_word!").await;

    let response = app
        .delete_authenticated(&format!("/api/v1/users/{}", target_id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_current_user() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;
    let token = app.login("nicola", "pass_word!").await;

    let response = app
        .get_authenticated("/api/v1/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], user_id);
    assert_eq!(body["data"]["username"], "nicola");
}
