//! Account manager: registration, login, seeding, and admin removal.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use rolegate_core::config::{AuthConfig, SeedUserConfig};
use rolegate_core::error::AppError;

use crate::identity::{Identity, NewIdentity, Role};
use crate::jwt::{IssuedToken, TokenIssuer};
use crate::password::{PasswordHasher, PasswordValidator};
use crate::store::CredentialStore;

/// Message returned for any failed login, so callers cannot probe which
/// emails exist.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated identity.
    pub identity: Identity,
    /// A freshly issued token for it.
    pub token: IssuedToken,
}

/// Coordinates the credential store, password hashing, and token issuing.
#[derive(Clone)]
pub struct AccountManager {
    /// Identity persistence.
    store: Arc<dyn CredentialStore>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Password policy for new accounts.
    validator: PasswordValidator,
    /// Hash checked on unknown-email logins so both failure paths pay for
    /// one Argon2 verification.
    dummy_hash: Option<Arc<str>>,
}

impl std::fmt::Debug for AccountManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountManager")
            .field("issuer", &self.issuer)
            .field("validator", &self.validator)
            .finish()
    }
}

impl AccountManager {
    /// Creates a new account manager.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        issuer: Arc<TokenIssuer>,
        config: &AuthConfig,
    ) -> Self {
        let hasher = PasswordHasher::new();
        let dummy_hash = match hasher.hash_password("rolegate-unknown-account") {
            Ok(hash) => Some(Arc::from(hash)),
            Err(e) => {
                warn!(error = %e, "Failed to prepare login timing hash");
                None
            }
        };

        Self {
            store,
            issuer,
            hasher,
            validator: PasswordValidator::new(config),
            dummy_hash,
        }
    }

    /// Registers a new account with the `user` role and signs it in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<LoginResult, AppError> {
        self.validator.validate(password)?;

        let identity = self
            .store
            .put(NewIdentity {
                email: email.to_string(),
                password_hash: self.hasher.hash_password(password)?,
                display_name: display_name.to_string(),
                role: Role::User,
            })
            .await?;

        let token = self.issuer.issue(&identity)?;
        info!(user_id = identity.id, "Account registered");

        Ok(LoginResult { identity, token })
    }

    /// Checks email and password and issues a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let Some(identity) = self.store.get_by_email(email).await? else {
            if let Some(hash) = &self.dummy_hash {
                let _ = self.hasher.verify_password(password, hash);
            }
            warn!("Login failed: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self
            .hasher
            .verify_password(password, &identity.password_hash)?
        {
            warn!(user_id = identity.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let token = self.issuer.issue(&identity)?;
        info!(user_id = identity.id, role = %identity.role, "Login successful");

        Ok(LoginResult { identity, token })
    }

    /// Inserts configured accounts that are not already present.
    ///
    /// Returns the number of accounts created. An unknown role name is a
    /// configuration error.
    pub async fn seed(&self, users: &[SeedUserConfig]) -> Result<usize, AppError> {
        let mut created = 0;

        for user in users {
            let role = Role::from_str(&user.role).map_err(|e| {
                AppError::configuration(format!("Seed user '{}': {}", user.email, e.message))
            })?;

            if self.store.get_by_email(&user.email).await?.is_some() {
                continue;
            }

            self.store
                .put(NewIdentity {
                    email: user.email.clone(),
                    password_hash: self.hasher.hash_password(&user.password)?,
                    display_name: user.display_name.clone(),
                    role,
                })
                .await?;
            created += 1;
        }

        let total = self.store.count().await?;
        info!(created, total, "Seed accounts loaded");
        Ok(created)
    }

    /// Looks up an identity by id.
    pub async fn find(&self, id: i64) -> Result<Identity, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists every identity.
    pub async fn list(&self) -> Result<Vec<Identity>, AppError> {
        self.store.list().await
    }

    /// Removes an identity by email.
    ///
    /// Tokens already issued to it stay valid until they expire.
    pub async fn delete(&self, email: &str) -> Result<(), AppError> {
        if !self.store.delete_by_email(email).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!("Account deleted");
        Ok(())
    }
}
