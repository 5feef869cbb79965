//! Unauthenticated endpoints.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse, MessageResponse};

/// GET /health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /public
pub async fn public() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse {
        message: "This is a public endpoint".to_string(),
    }))
}
