//! Token creation with a fixed signing secret and TTL.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use rolegate_core::config::AuthConfig;
use rolegate_core::error::AppError;

use crate::identity::Identity;

use super::claims::Claims;
use super::{SIGNING_ALGORITHM, signing_secret};

/// Creates signed, time-bounded tokens for identities.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token lifetime.
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").field("ttl", &self.ttl).finish()
    }
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The opaque `header.claims.signature` string.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    ///
    /// Fails with a configuration error when the secret is empty, the TTL
    /// is zero, or the TTL pushes expiry past the representable date range.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let secret = signing_secret(config)?;
        if config.token_ttl_hours == 0 {
            return Err(AppError::configuration("auth.token_ttl_hours must be positive"));
        }
        let hours = i64::try_from(config.token_ttl_hours)
            .map_err(|_| AppError::configuration("auth.token_ttl_hours is too large"))?;
        let ttl = Duration::try_hours(hours)
            .ok_or_else(|| AppError::configuration("auth.token_ttl_hours is too large"))?;
        if Utc::now().checked_add_signed(ttl).is_none() {
            return Err(AppError::configuration("auth.token_ttl_hours is too large"));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        })
    }

    /// The lifetime given to every issued token.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for `identity`, valid from now for the configured TTL.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    ///
    /// Claims carry whole seconds, so `now` is truncated first and the
    /// returned `expires_at` is exactly the signed `exp`.
    pub fn issue_at(
        &self,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let now = now.trunc_subsecs(0);
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;

        let claims = Claims {
            user_id: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
