//! Token verification failures.

use thiserror::Error;

use rolegate_core::error::AppError;

/// Why a presented token was rejected.
///
/// Every variant collapses to an authentication failure (401) at the HTTP
/// boundary; the variant itself is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthError {
    /// The string is not a `header.claims.signature` token.
    #[error("malformed token")]
    MalformedToken,
    /// The signature does not match the shared secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token's expiry is not in the future.
    #[error("token has expired")]
    Expired,
    /// A required claim is missing or has the wrong type.
    #[error("malformed token claims")]
    MalformedClaims,
}

impl AuthError {
    /// Stable machine-readable code, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken => "malformed_token",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
            Self::MalformedClaims => "malformed_claims",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::authentication(err.to_string())
    }
}
