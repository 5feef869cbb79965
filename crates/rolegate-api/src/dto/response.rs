//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rolegate_auth::identity::{Identity, Role};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of an identity; never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: Role,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.display_name,
            role: identity.role,
            created_at: identity.created_at,
        }
    }
}

/// Register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Outcome message.
    pub message: String,
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The signed-in user.
    pub user: UserResponse,
}

/// Profile of the calling user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Subject id from the token.
    pub user_id: i64,
    /// Email from the token.
    pub email: String,
    /// Role from the token.
    pub role: Role,
    /// Stored account record.
    pub user: UserResponse,
}

/// Token verification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Always true; invalid tokens never reach the handler.
    pub valid: bool,
    /// Subject id.
    pub user_id: i64,
    /// Email.
    pub email: String,
    /// Role.
    pub role: Role,
}

/// Admin user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Greeting.
    pub message: String,
    /// All accounts.
    pub users: Vec<UserResponse>,
}

/// Moderation panel greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    /// Greeting.
    pub message: String,
    /// The caller's role.
    pub role: Role,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
