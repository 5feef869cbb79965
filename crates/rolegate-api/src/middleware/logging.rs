//! Access log middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs one line per request with method, path, status, and duration.
///
/// 401 and 403 are logged at `warn` so rejected access stands out. The
/// token itself is never logged, only whether one was sent.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let has_credentials = request.headers().contains_key(AUTHORIZATION);
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        warn!(
            %method,
            %path,
            status = status.as_u16(),
            has_credentials,
            duration_ms,
            "Access rejected"
        );
    } else {
        info!(
            %method,
            %path,
            status = status.as_u16(),
            has_credentials,
            duration_ms,
            "HTTP request"
        );
    }

    response
}
