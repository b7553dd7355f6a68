//! Session token creation with configurable signing secret and lifetime.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use socia_core::config::AuthConfig;
use socia_core::error::AppError;
use socia_entity::user::Identity;

use super::claims::SessionClaims;

/// A freshly signed session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedSession {
    /// The signed token, handed to the client.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds, for cookie `Max-Age`.
    pub max_age_seconds: i64,
}

/// Signs identities into HS256 session tokens.
#[derive(Clone)]
pub struct SessionEncoder {
    encoding_key: EncodingKey,
    max_age_seconds: i64,
}

impl std::fmt::Debug for SessionEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEncoder")
            .field("max_age_seconds", &self.max_age_seconds)
            .finish()
    }
}

impl SessionEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            max_age_seconds: i64::try_from(config.session_max_age_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Issues a session for the identity, valid from now.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedSession, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issues a session as if it had been signed at `issued_at`.
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedSession, AppError> {
        let claims = SessionClaims::for_identity(identity, issued_at, self.max_age_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.session_max_age_seconds {} is out of range",
                    self.max_age_seconds
                ))
            })?;

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        debug!(user_id = %claims.sub, jti = %claims.jti, "Session token issued");

        Ok(IssuedSession {
            token,
            expires_at: claims.exp,
            max_age_seconds: self.max_age_seconds,
        })
    }
}
