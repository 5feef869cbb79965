//! Token validation: structure, signature, expiry, then claims.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use serde_json::Value;

use rolegate_core::config::AuthConfig;
use rolegate_core::error::AppError;

use crate::error::AuthError;
use crate::identity::AuthContext;

use super::claims::Claims;
use super::{SIGNING_ALGORITHM, signing_secret};

/// Validates tokens and turns them into an [`AuthContext`].
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature-only validation; expiry and claims are checked here.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let secret = signing_secret(config)?;

        // Expiry is evaluated against an explicit clock in `verify_at`.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// Checks, in order:
    /// 1. Three base64url segments with a JSON header
    /// 2. HS256 signature (constant-time comparison)
    /// 3. Expiration (`exp` must be strictly after `now`)
    /// 4. Presence and types of `user_id`, `email`, `role`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthContext, AuthError> {
        check_structure(token)?;

        let data = decode::<Value>(token, &self.decoding_key, &self.validation)
            .map_err(classify_decode_error)?;
        let raw = data.claims;

        let exp = raw
            .get("exp")
            .and_then(Value::as_i64)
            .ok_or(AuthError::MalformedClaims)?;
        if now.timestamp() >= exp {
            return Err(AuthError::Expired);
        }

        let claims: Claims =
            serde_json::from_value(raw).map_err(|_| AuthError::MalformedClaims)?;

        Ok(AuthContext::from_claims(claims))
    }
}

/// Rejects anything that is not `header.claims.signature` with decodable
/// segments, so later decode failures can only come from the claims.
fn check_structure(token: &str) -> Result<(), AuthError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::MalformedToken);
    }

    for segment in &segments {
        if segment.is_empty() || URL_SAFE_NO_PAD.decode(segment).is_err() {
            return Err(AuthError::MalformedToken);
        }
    }

    decode_header(token).map_err(|_| AuthError::MalformedToken)?;
    Ok(())
}

fn classify_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        ErrorKind::Json(_) | ErrorKind::Utf8(_) | ErrorKind::Base64(_) => AuthError::MalformedClaims,
        _ => AuthError::MalformedToken,
    }
}
