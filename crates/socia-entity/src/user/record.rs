//! External user-store record.

use serde::{Deserialize, Serialize};

use socia_core::AppError;
use socia_core::config::SeedUser;

use super::identity::Identity;
use super::role::UserRole;

/// A user as known to the external store, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
}

impl UserRecord {
    /// Projects the record onto the identity carried in a session.
    pub fn to_identity(&self) -> Identity {
        Identity::new(&self.id, &self.name, &self.email, self.role)
    }
}

impl TryFrom<&SeedUser> for UserRecord {
    type Error = AppError;

    fn try_from(seed: &SeedUser) -> Result<Self, Self::Error> {
        Ok(Self {
            id: seed.id.clone(),
            name: seed.name.clone(),
            email: seed.email.clone(),
            role: seed.role.parse()?,
        })
    }
}
