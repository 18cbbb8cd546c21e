//! HTTP-level tests for registration, login, and the token gate.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use tower::ServiceExt;

#[tokio::test]
async fn register_returns_created_without_the_hash() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "Str0ng!Pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], "alice@example.com");
    assert!(response.body["data"].get("password_hash").is_none());
    assert!(response.body["data"].get("password").is_none());
}

#[tokio::test]
async fn register_rejects_weak_passwords_with_field_details() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "weak",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let details = response.body["details"].as_array().expect("details");
    assert!(details.iter().any(|v| v["field"] == "password"));
}

#[tokio::test]
async fn duplicate_registration_does_not_confirm_the_account() {
    let app = TestApp::new();
    app.register("alice@example.com", "Str0ng!Pass").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "Alice@Example.com",
                "password": "An0ther!Pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "REGISTRATION_FAILED");
    let message = response.body["message"].as_str().unwrap().to_lowercase();
    assert!(!message.contains("exist"));
    assert!(!message.contains("alice"));
}

#[tokio::test]
async fn login_returns_a_token_that_opens_the_gate() {
    let app = TestApp::new();
    app.register("alice@example.com", "Str0ng!Pass").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "Str0ng!Pass",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["expires_in_seconds"], 3600);
    let token = response.body["data"]["token"].as_str().unwrap();

    let me = app.request("GET", "/api/auth/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn unknown_user_and_wrong_password_get_the_same_response() {
    let app = TestApp::new();
    app.register("alice@example.com", "Str0ng!Pass").await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "Str0ng!Pass",
            })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["error"], wrong.body["error"]);
    assert_eq!(unknown.body["message"], wrong.body["message"]);
}

#[tokio::test]
async fn missing_token_is_distinguished_from_malformed() {
    let app = TestApp::new();

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], "TOKEN_MISSING");

    // "Basic ..." is present but not a bearer token.
    let response = app
        .router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .header("Authorization", "Basic abc123")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "TOKEN_MALFORMED");
}

#[tokio::test]
async fn garbage_token_is_rejected_as_invalid() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "TOKEN_INVALID");
}

#[tokio::test]
async fn expired_token_reports_when_it_expired() {
    let app = TestApp::new();

    // Forge a token signed with the right secret but already expired.
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": uuid::Uuid::new_v4(),
        "email": "alice@example.com",
        "iat": now - 7200,
        "exp": now - 3600,
        "iss": "roomhub-api",
        "aud": "roomhub-client",
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "TOKEN_EXPIRED");
    assert!(response.body["details"]["expired_at"].is_string());
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let app = TestApp::new();

    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": uuid::Uuid::new_v4(),
        "email": "alice@example.com",
        "iat": now,
        "exp": now + 3600,
        "iss": "roomhub-api",
        "aud": "roomhub-client",
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "TOKEN_INVALID");
}
