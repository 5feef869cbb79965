//! Role-based access control: requirements and the gate that checks them.

pub mod enforcer;
pub mod requirement;

pub use enforcer::{AccessDenied, AccessGate};
pub use requirement::RoleRequirement;
