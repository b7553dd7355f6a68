//! The authenticated user's minimal profile.

use serde::{Deserialize, Serialize};

use super::role::UserRole;

/// Who a session belongs to.
///
/// Built once at successful authorization and never mutated. It exists only
/// inside the signed session token and in request extensions while a request
/// is being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User id as issued by the authorizer or the user store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role at the time of login.
    pub role: UserRole,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}
