//! Role guard middleware: runs the token pipeline before protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use rolegate_auth::pipeline::RequestPipeline;
use rolegate_auth::rbac::RoleRequirement;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware state: the pipeline plus the requirement of one route group.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    pipeline: Arc<RequestPipeline>,
    requirement: Arc<RoleRequirement>,
}

impl RouteGuard {
    /// Creates a guard enforcing `requirement` with the app's pipeline.
    pub fn new(state: &AppState, requirement: RoleRequirement) -> Self {
        Self {
            pipeline: Arc::clone(&state.pipeline),
            requirement: Arc::new(requirement),
        }
    }
}

/// Verifies the bearer token, then checks the route's role requirement.
///
/// On success the verified `AuthContext` is placed in the request
/// extensions for the `AuthUser` extractor. Failures short-circuit with
/// 401 (no valid identity) or 403 (role not permitted).
pub async fn require_role(
    State(guard): State<RouteGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // A non-UTF-8 header is present but unusable, which is not the same as absent.
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default());

    let ctx = guard
        .pipeline
        .evaluate(authorization, &guard.requirement)
        .into_result()?;

    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use tower::ServiceExt;

    use rolegate_auth::identity::{Identity, Role};
    use rolegate_auth::jwt::TokenIssuer;
    use rolegate_auth::store::InMemoryCredentialStore;
    use rolegate_core::config::AppConfig;

    use super::*;
    use crate::app::build_state;
    use crate::extractors::AuthUser;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "guard-secret".to_string();
        config
    }

    fn guarded(requirement: RoleRequirement) -> Router {
        let state = build_state(config(), Arc::new(InMemoryCredentialStore::new())).unwrap();
        Router::new()
            .route("/", get(|auth: AuthUser| async move { auth.email().to_string() }))
            .route_layer(from_fn_with_state(
                RouteGuard::new(&state, requirement),
                require_role,
            ))
    }

    fn token_for(role: Role) -> String {
        let identity = Identity {
            id: 7,
            email: "guard@example.com".to_string(),
            password_hash: String::new(),
            display_name: String::new(),
            role,
            created_at: chrono::Utc::now(),
        };
        TokenIssuer::new(&config().auth)
            .unwrap()
            .issue(&identity)
            .unwrap()
            .token
    }

    async fn status(router: Router, authorization: Option<String>) -> StatusCode {
        let mut req = Request::builder().uri("/");
        if let Some(value) = authorization {
            req = req.header(AUTHORIZATION, value);
        }
        router
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_guard_maps_decisions_to_status() {
        let admin_only = || guarded(RoleRequirement::Exactly(Role::Admin));

        assert_eq!(status(admin_only(), None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(
            status(admin_only(), Some("Basic abc".to_string())).await,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(admin_only(), Some(format!("Bearer {}", token_for(Role::User)))).await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status(admin_only(), Some(format!("Bearer {}", token_for(Role::Admin)))).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_extractor_outside_guard_is_unauthenticated() {
        let router = Router::new().route("/", get(|auth: AuthUser| async move { auth.role().to_string() }));
        assert_eq!(status(router, None).await, StatusCode::UNAUTHORIZED);
    }
}
