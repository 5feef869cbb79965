//! # rolegate-auth
//!
//! Role-based token authentication and authorization for Rolegate.
//!
//! ## Modules
//!
//! - `identity`: roles, stored identities and the per-request `AuthContext`
//! - `store`: credential store abstraction and its in-memory implementation
//! - `jwt`: token issuing and verification (HS256)
//! - `rbac`: role requirements and the access gate
//! - `pipeline`: bearer extraction, verification then authorization
//! - `password`: Argon2id password hashing and policy enforcement
//! - `account`: registration, login and startup seeding

pub mod account;
pub mod error;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod pipeline;
pub mod rbac;
pub mod store;

pub use account::{AccountManager, LoginResult};
pub use error::AuthError;
pub use identity::{AuthContext, Identity, NewIdentity, Role};
pub use jwt::{Claims, IssuedToken, TokenIssuer, TokenVerifier};
pub use password::{PasswordHasher, PasswordValidator};
pub use pipeline::{AuthenticationFailure, Decision, RequestPipeline};
pub use rbac::{AccessDenied, AccessGate, RoleRequirement};
pub use store::{CredentialStore, InMemoryCredentialStore};
