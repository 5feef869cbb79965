//! Route definitions for the Rolegate HTTP API.
//!
//! Routes are grouped by the role requirement that guards them. Each
//! guarded group gets its own `require_role` route layer, so the
//! requirement is fixed where the route is declared.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use rolegate_auth::identity::Role;
use rolegate_auth::rbac::RoleRequirement;

use crate::handlers;
use crate::middleware;
use crate::middleware::auth::RouteGuard;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(public_routes())
        .merge(authenticated_routes(&state))
        .merge(admin_routes(&state))
        .merge(moderation_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// No credentials required.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/public", get(handlers::health::public))
        .route("/health", get(handlers::health::health))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Any verified identity.
fn authenticated_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::auth::profile))
        .route("/verify", get(handlers::auth::verify))
        .route_layer(axum_middleware::from_fn_with_state(
            RouteGuard::new(state, RoleRequirement::Authenticated),
            middleware::auth::require_role,
        ))
}

/// Admins only.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(handlers::admin::list_users).delete(handlers::admin::delete_user),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            RouteGuard::new(state, RoleRequirement::Exactly(Role::Admin)),
            middleware::auth::require_role,
        ))
}

/// Admins and moderators.
fn moderation_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/moderation", get(handlers::moderation::moderation_panel))
        .route_layer(axum_middleware::from_fn_with_state(
            RouteGuard::new(state, RoleRequirement::any_of([Role::Admin, Role::Moderator])),
            middleware::auth::require_role,
        ))
}
