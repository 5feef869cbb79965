//! Role gating of the admin and moderation routes.

use http::StatusCode;

use crate::helpers::{self, ADMIN, MODERATOR, USER};

#[tokio::test]
async fn test_admin_route_gated_to_admin() {
    let app = helpers::TestApp::new().await;

    let user = app.login(USER).await;
    let moderator = app.login(MODERATOR).await;
    let admin = app.login(ADMIN).await;

    let response = app.request("GET", "/admin/users", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/admin/users", None, Some(&moderator))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/admin/users", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_admin_route_without_token_is_401_not_403() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/admin/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_moderation_route_allows_admin_and_moderator() {
    let app = helpers::TestApp::new().await;

    let user = app.login(USER).await;
    let response = app.request("GET", "/moderation", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    for account in [MODERATOR, ADMIN] {
        let token = app.login(account).await;
        let response = app.request("GET", "/moderation", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_deleted_account_token_still_verifies_but_profile_is_404() {
    let app = helpers::TestApp::new().await;
    let admin = app.login(ADMIN).await;
    let user = app.login(USER).await;

    let response = app
        .request(
            "DELETE",
            "/admin/users",
            Some(serde_json::json!({ "email": USER.0 })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let verify = app.request("GET", "/verify", None, Some(&user)).await;
    assert_eq!(verify.status, StatusCode::OK);

    let profile = app.request("GET", "/profile", None, Some(&user)).await;
    assert_eq!(profile.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_user_is_404() {
    let app = helpers::TestApp::new().await;
    let admin = app.login(ADMIN).await;

    let response = app
        .request(
            "DELETE",
            "/admin/users",
            Some(serde_json::json!({ "email": "ghost@example.com" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_is_admin_only() {
    let app = helpers::TestApp::new().await;

    for account in [USER, MODERATOR] {
        let token = app.login(account).await;
        let response = app
            .request(
                "DELETE",
                "/admin/users",
                Some(serde_json::json!({ "email": ADMIN.0 })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["error"], "FORBIDDEN");
    }

    // The admin account survived both attempts.
    app.login(ADMIN).await;
}

#[tokio::test]
async fn test_role_check_runs_before_body_parsing() {
    let app = helpers::TestApp::new().await;
    let user = app.login(USER).await;

    let forbidden = app
        .request("DELETE", "/admin/users", None, Some(&user))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let unauthenticated = app.request("DELETE", "/admin/users", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);
}
