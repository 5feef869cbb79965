//! The verified identity attached to a single request.

use serde::Serialize;

use crate::jwt::Claims;

use super::role::Role;

/// Identity and role taken from a verified token.
///
/// Only the token verifier can build one, so holding an `AuthContext`
/// proves the token behind it passed signature, expiry, and claim checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    subject_id: i64,
    email: String,
    role: Role,
}

impl AuthContext {
    pub(crate) fn from_claims(claims: Claims) -> Self {
        Self {
            subject_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }

    /// The subject's identity id.
    pub fn subject_id(&self) -> i64 {
        self.subject_id
    }

    /// The subject's email at token issuance.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The subject's role at token issuance.
    pub fn role(&self) -> Role {
        self.role
    }
}
