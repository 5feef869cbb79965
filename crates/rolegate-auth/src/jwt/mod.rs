//! Token issuing, verification, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenVerifier;
pub use encoder::{IssuedToken, TokenIssuer};

use jsonwebtoken::Algorithm;

use rolegate_core::config::AuthConfig;
use rolegate_core::error::AppError;

/// The only signing algorithm issued or accepted.
pub(crate) const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Returns the shared signing secret, rejecting an unusable one.
///
/// An empty secret is a deployment error and must stop startup instead of
/// failing each request.
pub(crate) fn signing_secret(config: &AuthConfig) -> Result<&[u8], AppError> {
    if config.jwt_secret.trim().is_empty() {
        return Err(AppError::configuration("auth.jwt_secret must not be empty"));
    }
    Ok(config.jwt_secret.as_bytes())
}
