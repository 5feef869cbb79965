//! `AuthUser` extractor: hands the guard's verified context to handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rolegate_auth::identity::AuthContext;
use rolegate_core::error::AppError;

use crate::error::ApiError;

/// The verified caller of a guarded route.
///
/// Only available behind the `require_role` middleware; anywhere else the
/// extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl std::ops::Deref for AuthUser {
    type Target = AuthContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError(AppError::authentication("Authentication required")))
    }
}
