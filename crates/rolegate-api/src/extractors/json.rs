//! `JsonBody` extractor: axum's `Json` with rejections in the API error format.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use rolegate_core::error::{AppError, ErrorKind};

use crate::error::ApiError;

/// A JSON request body.
///
/// Missing fields, wrong types, syntax errors, an empty body, or a wrong
/// content type all become a 400 `ApiErrorResponse`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError(AppError::new(
                ErrorKind::Serialization,
                format!("Invalid request body: {}", rejection.body_text()),
            ))),
        }
    }
}
