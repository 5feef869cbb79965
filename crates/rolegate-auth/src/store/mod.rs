//! Credential store abstraction.
//!
//! The auth core reads identities through [`CredentialStore`] and never
//! touches process-wide state; the concrete store is injected.

pub mod memory;

use async_trait::async_trait;

use rolegate_core::result::AppResult;

use crate::identity::{Identity, NewIdentity};

pub use memory::InMemoryCredentialStore;

/// Persistence for identity records.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find an identity by login email.
    async fn get_by_email(&self, email: &str) -> AppResult<Option<Identity>>;

    /// Find an identity by id.
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Identity>>;

    /// All identities, ordered by id.
    async fn list(&self) -> AppResult<Vec<Identity>>;

    /// Insert a new identity and return it with its assigned id.
    ///
    /// Fails with a conflict error if the email is already registered.
    async fn put(&self, identity: NewIdentity) -> AppResult<Identity>;

    /// Delete an identity by email. Returns `true` if one was removed.
    async fn delete_by_email(&self, email: &str) -> AppResult<bool>;

    /// Count stored identities.
    async fn count(&self) -> AppResult<usize>;
}
