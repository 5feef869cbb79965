//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use rolegate_auth::store::InMemoryCredentialStore;
use rolegate_core::config::{AppConfig, SeedUserConfig};

/// Seeded accounts: (email, password, role).
pub const ADMIN: (&str, &str) = ("admin@example.com", "admin123");
pub const MODERATOR: (&str, &str) = ("moderator@example.com", "mod123");
pub const USER: (&str, &str) = ("user@example.com", "user123");

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with the three seed accounts
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.password_min_length = 6;
        config.users = vec![
            seed_user(ADMIN, "admin"),
            seed_user(MODERATOR, "moderator"),
            seed_user(USER, "user"),
        ];

        let store = Arc::new(InMemoryCredentialStore::new());
        let state = rolegate_api::build_state(config.clone(), store)
            .expect("Failed to build application state");
        state
            .accounts
            .seed(&config.users)
            .await
            .expect("Failed to seed accounts");

        Self {
            router: rolegate_api::build_app(state),
        }
    }

    /// Login and return the bearer token
    pub async fn login(&self, (email, password): (&str, &str)) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {}", t));
        self.request_with_header(method, path, body, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn seed_user((email, password): (&str, &str), role: &str) -> SeedUserConfig {
    SeedUserConfig {
        email: email.to_string(),
        password: password.to_string(),
        display_name: role.to_string(),
        role: role.to_string(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
