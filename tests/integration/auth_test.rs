//! Registration, login, and token verification over HTTP.

use http::StatusCode;

use crate::helpers::{self, ADMIN, USER};

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/public", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": USER.0, "password": USER.1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(response.body["data"]["user"]["role"], "user");
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": USER.0, "password": "wrongpassword" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "nobody@example.com", "password": "whatever" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_register_then_use_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "new@example.com",
                "password": "newpassword",
                "name": "New User",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["user"]["role"], "user");
    let token = response.body["data"]["token"].as_str().unwrap().to_string();

    let profile = app.request("GET", "/profile", None, Some(&token)).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["data"]["email"], "new@example.com");
    assert_eq!(profile.body["data"]["user"]["name"], "New User");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": USER.0,
                "password": "anotherpassword",
                "name": "Impostor",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_invalid_input() {
    let app = helpers::TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "email": "not-an-email", "password": "longenough", "name": "X" })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "email": "short@example.com", "password": "abc", "name": "X" })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_verify_reports_token_claims() {
    let app = helpers::TestApp::new().await;
    let token = app.login(ADMIN).await;

    let response = app.request("GET", "/verify", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["valid"], true);
    assert_eq!(response.body["data"]["email"], ADMIN.0);
    assert_eq!(response.body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_missing_or_malformed_credentials_are_401() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("GET", "/profile", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let wrong_scheme = app
        .request_with_header("GET", "/profile", None, Some("Basic dXNlcjpwdw=="))
        .await;
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/profile", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_401() {
    let app = helpers::TestApp::new().await;
    let token = app.login(USER).await;

    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let sig = parts[2].clone();
    let first = if sig.starts_with('A') { 'B' } else { 'A' };
    parts[2] = format!("{}{}", first, &sig[1..]);
    let tampered = parts.join(".");

    let response = app.request("GET", "/verify", None, Some(&tampered)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unreadable_bodies_are_400_with_error_json() {
    let app = helpers::TestApp::new().await;

    let missing_field = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "email": "x@example.com" })),
            None,
        )
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_field.body["error"], "VALIDATION_ERROR");
    assert!(missing_field.body["message"].is_string());

    let empty = app.request("POST", "/login", None, None).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], "VALIDATION_ERROR");

    let wrong_type = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": 42, "password": "x" })),
            None,
        )
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_response_expiry_is_whole_seconds() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": USER.0, "password": USER.1 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let expires_at = response.body["data"]["expires_at"].as_str().unwrap();
    assert!(!expires_at.contains('.'), "unexpected fraction in {expires_at}");
}
