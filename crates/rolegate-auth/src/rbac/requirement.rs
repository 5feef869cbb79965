//! What a protected operation asks of the caller's role.

use std::collections::HashSet;
use std::fmt;

use crate::identity::Role;

/// A role constraint attached to a protected operation.
///
/// Matching is by set membership only; no role implies another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    /// The caller's role must equal this role.
    Exactly(Role),
    /// The caller's role must be one of these. An empty set admits nobody.
    AnyOf(HashSet<Role>),
    /// Any verified identity passes.
    Authenticated,
}

impl RoleRequirement {
    /// Builds an `AnyOf` requirement from a list of roles.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::AnyOf(roles.into_iter().collect())
    }

    /// Checks whether `role` meets this requirement.
    pub fn is_satisfied_by(&self, role: Role) -> bool {
        match self {
            Self::Exactly(required) => *required == role,
            Self::AnyOf(allowed) => allowed.contains(&role),
            Self::Authenticated => true,
        }
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(role) => write!(f, "role '{role}'"),
            Self::AnyOf(roles) => {
                let mut names: Vec<&str> = roles.iter().map(Role::as_str).collect();
                names.sort_unstable();
                write!(f, "one of roles [{}]", names.join(", "))
            }
            Self::Authenticated => write!(f, "an authenticated identity"),
        }
    }
}
