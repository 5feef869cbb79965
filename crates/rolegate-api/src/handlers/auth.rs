//! Auth handlers: register, login, profile, verify.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest, validate_request};
use crate::dto::response::{
    ApiResponse, AuthResponse, ProfileResponse, UserResponse, VerifyResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    validate_request(&req)?;

    let result = state
        .accounts
        .register(&req.email, &req.password, &req.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthResponse {
            message: "User registered successfully".to_string(),
            token: result.token.token,
            expires_at: result.token.expires_at,
            user: result.identity.into(),
        })),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_request(&req)?;

    let result = state.accounts.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        message: "Logged in successfully".to_string(),
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: result.identity.into(),
    })))
}

/// GET /profile
///
/// 404 if the account was deleted after the token was issued.
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let identity = state.accounts.find(auth.subject_id()).await?;

    Ok(Json(ApiResponse::ok(ProfileResponse {
        user_id: auth.subject_id(),
        email: auth.email().to_string(),
        role: auth.role(),
        user: UserResponse::from(identity),
    })))
}

/// GET /verify
pub async fn verify(auth: AuthUser) -> Json<ApiResponse<VerifyResponse>> {
    Json(ApiResponse::ok(VerifyResponse {
        valid: true,
        user_id: auth.subject_id(),
        email: auth.email().to_string(),
        role: auth.role(),
    }))
}
