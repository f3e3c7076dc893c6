use chrono::{Duration, Utc};
use fake::{
    Fake,
    faker::internet::en::{Password as FakePassword, SafeEmail, Username as FakeUsername},
};
use secrecy::Secret;
use serde_json::{Value, json};
use travelease_adapters::{JwtAuthConfig, JwtCredentials};
use travelease_core::{CredentialIssuer, UserId};

use crate::helpers::{JWT_SECRET, TestApp, error_message};

#[tokio::test]
async fn register_returns_201_with_token_and_profile() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "secret1",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn registration_conflict_returns_409() {
    let app = TestApp::new().await;
    app.register_user("a", "a@x.com", "secret1").await;

    let response = app
        .post_register(&json!({
            "username": "b",
            "email": "a@x.com",
            "password": "secret2",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "User already exists");
}

#[tokio::test]
async fn register_rejects_invalid_input_with_400() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({"email": "a@x.com", "password": "secret1"}),
        json!({"username": "a", "password": "secret1"}),
        json!({"username": "a", "email": "a@x.com"}),
        json!({"username": "a", "email": "a@x.com", "password": "12345"}),
        json!({"username": "a", "email": "not-an-email", "password": "secret1"}),
    ];

    for test_case in test_cases {
        let response = app.post_register(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {test_case}"
        );
    }
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/auth/register", app.address))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn login_succeeds_with_registered_credentials() {
    let app = TestApp::new().await;
    let username: String = FakeUsername().fake();
    let email: String = SafeEmail().fake();
    let password: String = FakePassword(8..16).fake();
    app.register_user(&username, &email, &password).await;

    let response = app
        .post_login(&json!({"email": email, "password": password}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], email.as_str());
}

#[tokio::test]
async fn bad_login_returns_401() {
    let app = TestApp::new().await;
    app.register_user("a", "a@x.com", "secret1").await;

    let wrong_password = app
        .post_login(&json!({"email": "a@x.com", "password": "wrong"}))
        .await;
    let unknown_email = app
        .post_login(&json!({"email": "nobody@x.com", "password": "secret1"}))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);
    assert_eq!(
        error_message(wrong_password).await,
        error_message(unknown_email).await
    );
}

#[tokio::test]
async fn me_returns_the_current_user() {
    let app = TestApp::new().await;
    let token = app.register_user("a", "a@x.com", "secret1").await;

    let response = app.get_with_token("/api/auth/me", &token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], "a");
    assert!(body["user"]["created_at"].is_string());
}

#[tokio::test]
async fn missing_token_returns_401_with_distinct_message() {
    let app = TestApp::new().await;

    let response = app.get("/api/auth/me").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "No token provided");
}

#[tokio::test]
async fn invalid_token_returns_401() {
    let app = TestApp::new().await;

    let response = app.get_with_token("/api/auth/me", "invalid_token").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[tokio::test]
async fn expired_and_forged_tokens_get_the_same_answer() {
    let app = TestApp::new().await;
    app.register_user("a", "a@x.com", "secret1").await;

    let issuer = JwtCredentials::new(JwtAuthConfig::new(Secret::new(JWT_SECRET.to_owned())));
    let expired = issuer
        .issue_at(UserId::new(1), Utc::now() - Duration::hours(25))
        .unwrap();
    let forged = JwtCredentials::new(JwtAuthConfig::new(Secret::new("other-secret".to_owned())))
        .issue(UserId::new(1))
        .unwrap();

    let expired_response = app.get_with_token("/api/auth/me", expired.as_str()).await;
    let forged_response = app.get_with_token("/api/auth/me", forged.as_str()).await;

    assert_eq!(expired_response.status().as_u16(), 401);
    assert_eq!(forged_response.status().as_u16(), 401);
    assert_eq!(error_message(expired_response).await, "Invalid token");
    assert_eq!(error_message(forged_response).await, "Invalid token");
}
