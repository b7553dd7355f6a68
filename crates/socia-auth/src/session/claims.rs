//! JWT claims structure carried in the session token.

use chrono::serde::ts_seconds;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use socia_entity::user::{Identity, UserRole};

/// Session token payload: the identity plus issue and expiry times.
///
/// `iat` and `exp` travel as seconds since the epoch; a token whose
/// timestamps are out of range fails to deserialize and is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — the user id.
    pub sub: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp.
    #[serde(with = "ts_seconds")]
    pub iat: DateTime<Utc>,
    /// Expiration timestamp.
    #[serde(with = "ts_seconds")]
    pub exp: DateTime<Utc>,
    /// Token id, for log correlation.
    pub jti: Uuid,
}

impl SessionClaims {
    /// Builds claims for an identity valid from `issued_at` for `max_age_seconds`.
    ///
    /// Returns `None` when the expiry cannot be represented.
    pub fn for_identity(
        identity: &Identity,
        issued_at: DateTime<Utc>,
        max_age_seconds: i64,
    ) -> Option<Self> {
        let max_age = TimeDelta::try_seconds(max_age_seconds)?;
        let expires_at = issued_at.checked_add_signed(max_age)?;

        Some(Self {
            sub: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            iat: issued_at,
            exp: expires_at,
            jti: Uuid::new_v4(),
        })
    }

    /// Reconstructs the identity carried by these claims.
    pub fn identity(&self) -> Identity {
        Identity::new(&self.sub, &self.name, &self.email, self.role)
    }
}
