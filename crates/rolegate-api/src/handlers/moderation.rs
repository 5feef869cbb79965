//! Moderation panel, open to admins and moderators.

use axum::Json;

use crate::dto::response::{ApiResponse, ModerationResponse};
use crate::extractors::AuthUser;

/// GET /moderation
pub async fn moderation_panel(auth: AuthUser) -> Json<ApiResponse<ModerationResponse>> {
    Json(ApiResponse::ok(ModerationResponse {
        message: "Welcome to moderation panel".to_string(),
        role: auth.role(),
    }))
}
