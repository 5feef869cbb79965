//! Identities, roles, and the verified per-request context.

pub mod context;
pub mod model;
pub mod role;

pub use context::AuthContext;
pub use model::{Identity, NewIdentity};
pub use role::Role;
