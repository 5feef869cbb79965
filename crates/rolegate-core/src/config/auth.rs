//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped with the defaults; never use it in production.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Token signing and credential configuration.
///
/// The issuer and verifier must be built from the same values, including
/// across restarts and between instances of one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Minimum password length at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Returns true when the shipped placeholder secret is still configured.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.jwt_secret == PLACEHOLDER_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

/// An account created in the credential store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUserConfig {
    /// Login email.
    pub email: String,
    /// Plaintext password; hashed before it is stored.
    pub password: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Role name: `user`, `moderator` or `admin`.
    #[serde(default = "default_seed_role")]
    pub role: String,
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}

fn default_seed_role() -> String {
    "user".to_string()
}
