//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use rolegate_core::error::AppError;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password; policy is checked by the account manager.
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin request to remove an account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeleteUserRequest {
    /// Email of the account to delete.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Runs derive-based validation and maps failures to a validation error.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}
