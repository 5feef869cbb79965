//! In-memory credential store guarded by a single read/write lock.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use rolegate_core::error::AppError;
use rolegate_core::result::AppResult;

use crate::identity::{Identity, NewIdentity};

use super::CredentialStore;

#[derive(Debug)]
struct Inner {
    /// Identities keyed by normalized email.
    by_email: HashMap<String, Identity>,
    /// Next id to assign; ids are never reused.
    next_id: i64,
}

/// Identity storage held in process memory.
///
/// Concurrent readers, exclusive writers. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryCredentialStore {
    inner: RwLock<Inner>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                by_email: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Emails compare case-insensitively and without surrounding whitespace.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        let inner = self.inner.read().await;
        Ok(inner.by_email.get(&normalize_email(email)).cloned())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Identity>> {
        let inner = self.inner.read().await;
        Ok(inner.by_email.values().find(|i| i.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Identity>> {
        let inner = self.inner.read().await;
        let mut all: Vec<Identity> = inner.by_email.values().cloned().collect();
        all.sort_by_key(|i| i.id);
        Ok(all)
    }

    async fn put(&self, identity: NewIdentity) -> AppResult<Identity> {
        let email = normalize_email(&identity.email);
        let mut inner = self.inner.write().await;

        if inner.by_email.contains_key(&email) {
            return Err(AppError::conflict(format!(
                "User with email '{email}' already exists"
            )));
        }

        let stored = Identity {
            id: inner.next_id,
            email: email.clone(),
            password_hash: identity.password_hash,
            display_name: identity.display_name,
            role: identity.role,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.by_email.insert(email, stored.clone());

        debug!(user_id = stored.id, role = %stored.role, "Identity stored");
        Ok(stored)
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.by_email.remove(&normalize_email(email)).is_some())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.inner.read().await.by_email.len())
    }
}
