//! Claims payload carried by every token.

use serde::{Deserialize, Serialize};

use crate::identity::Role;

/// Claims embedded in a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity id.
    pub user_id: i64,
    /// Email at issuance.
    pub email: String,
    /// Role at issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
