//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login submission, as JSON or as a urlencoded form.
///
/// Missing fields deserialize to empty strings so that they are reported
/// through validation rather than as a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
