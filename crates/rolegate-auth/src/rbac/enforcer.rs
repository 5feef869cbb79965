//! The access gate: decides whether a verified caller may proceed.

use thiserror::Error;

use rolegate_core::error::AppError;

use crate::identity::{AuthContext, Role};

use super::requirement::RoleRequirement;

/// A verified caller whose role does not meet the requirement.
///
/// Distinct from every authentication failure: the caller is known, just
/// not allowed (403, never 401).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Forbidden: requires {requirement}, caller has role '{role}'")]
pub struct AccessDenied {
    /// The caller's role.
    pub role: Role,
    /// The requirement it failed.
    pub requirement: RoleRequirement,
}

impl From<AccessDenied> for AppError {
    fn from(denied: AccessDenied) -> Self {
        AppError::authorization(denied.to_string())
    }
}

/// Enforces role requirements against verified contexts.
///
/// Stateless and side-effect free.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Creates a new gate.
    pub fn new() -> Self {
        Self
    }

    /// Allows `ctx` through if its role satisfies `requirement`.
    pub fn authorize(
        &self,
        ctx: &AuthContext,
        requirement: &RoleRequirement,
    ) -> Result<(), AccessDenied> {
        if requirement.is_satisfied_by(ctx.role()) {
            Ok(())
        } else {
            Err(AccessDenied {
                role: ctx.role(),
                requirement: requirement.clone(),
            })
        }
    }
}
