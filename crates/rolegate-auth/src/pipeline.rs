//! Request pipeline: bearer extraction, token verification, then access gate.
//!
//! Authorization is only ever evaluated on a context produced by the
//! verifier. Transports map the resulting [`Decision`] onto their own
//! responses (continue / 401 / 403).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use rolegate_core::error::AppError;

use crate::error::AuthError;
use crate::identity::AuthContext;
use crate::jwt::TokenVerifier;
use crate::rbac::{AccessDenied, AccessGate, RoleRequirement};

/// Authorization scheme accepted in the `Authorization` header.
const BEARER_SCHEME: &str = "Bearer";

/// Why a request could not be authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthenticationFailure {
    /// No `Authorization` header was sent.
    #[error("Missing authorization header")]
    MissingCredentials,
    /// The header is not `Bearer <token>`.
    #[error("Invalid authorization header format")]
    InvalidScheme,
    /// The bearer token failed verification.
    #[error("Invalid token: {0}")]
    Token(#[from] AuthError),
}

impl AuthenticationFailure {
    /// Stable machine-readable code, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::InvalidScheme => "invalid_scheme",
            Self::Token(err) => err.kind(),
        }
    }
}

/// Outcome of running a request through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Verified and permitted; the operation runs with this context.
    Allow(AuthContext),
    /// No valid identity (401).
    Unauthenticated(AuthenticationFailure),
    /// Valid identity without the required role (403).
    Forbidden(AccessDenied),
}

impl Decision {
    /// Converts into the application error taxonomy.
    pub fn into_result(self) -> Result<AuthContext, AppError> {
        match self {
            Self::Allow(ctx) => Ok(ctx),
            Self::Unauthenticated(failure) => Err(AppError::authentication(failure.to_string())),
            Self::Forbidden(denied) => Err(denied.into()),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    if scheme != BEARER_SCHEME || token.is_empty() || token.contains(' ') {
        return None;
    }
    Some(token)
}

/// Composes the token verifier and the access gate for protected operations.
#[derive(Debug, Clone)]
pub struct RequestPipeline {
    /// Shared token verifier.
    verifier: Arc<TokenVerifier>,
    /// Role gate.
    gate: AccessGate,
}

impl RequestPipeline {
    /// Creates a pipeline over a shared verifier.
    pub fn new(verifier: Arc<TokenVerifier>, gate: AccessGate) -> Self {
        Self { verifier, gate }
    }

    /// Evaluates a request's `Authorization` header against `requirement`.
    pub fn evaluate(&self, authorization: Option<&str>, requirement: &RoleRequirement) -> Decision {
        self.evaluate_at(authorization, requirement, Utc::now())
    }

    /// Evaluates as if the current time were `now`.
    pub fn evaluate_at(
        &self,
        authorization: Option<&str>,
        requirement: &RoleRequirement,
        now: DateTime<Utc>,
    ) -> Decision {
        let ctx = match self.authenticate(authorization, now) {
            Ok(ctx) => ctx,
            Err(failure) => {
                warn!(reason = failure.kind(), "Request rejected: unauthenticated");
                return Decision::Unauthenticated(failure);
            }
        };

        match self.gate.authorize(&ctx, requirement) {
            Ok(()) => {
                debug!(subject_id = ctx.subject_id(), role = %ctx.role(), "Request authorized");
                Decision::Allow(ctx)
            }
            Err(denied) => {
                info!(
                    subject_id = ctx.subject_id(),
                    role = %ctx.role(),
                    requirement = %requirement,
                    "Request rejected: forbidden"
                );
                Decision::Forbidden(denied)
            }
        }
    }

    fn authenticate(
        &self,
        authorization: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthContext, AuthenticationFailure> {
        let header = authorization.ok_or(AuthenticationFailure::MissingCredentials)?;
        let token = bearer_token(header).ok_or(AuthenticationFailure::InvalidScheme)?;
        Ok(self.verifier.verify_at(token, now)?)
    }
}
