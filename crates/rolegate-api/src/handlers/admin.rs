//! Admin-only user management.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{DeleteUserRequest, validate_request};
use crate::dto::response::{ApiResponse, MessageResponse, UserListResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<UserListResponse>>, ApiError> {
    let users = state.accounts.list().await?;

    Ok(Json(ApiResponse::ok(UserListResponse {
        message: "Welcome to admin panel".to_string(),
        users: users.into_iter().map(Into::into).collect(),
    })))
}

/// DELETE /admin/users
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<DeleteUserRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_request(&req)?;

    state.accounts.delete(&req.email).await?;
    tracing::info!(admin_id = auth.subject_id(), "Admin removed an account");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("User {} deleted successfully", req.email),
    })))
}
