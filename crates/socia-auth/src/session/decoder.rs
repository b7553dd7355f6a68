//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use socia_core::config::AuthConfig;

use crate::error::AuthError;

use super::claims::SessionClaims;

/// Verifies session tokens. Pure: no I/O, no shared state.
#[derive(Clone)]
pub struct SessionDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token, reporting why it was refused.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        "token has expired".to_string()
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        "invalid token format".to_string()
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        "invalid token signature".to_string()
                    }
                    _ => format!("token validation failed: {e}"),
                };
                AuthError::InvalidOrExpiredSession(reason)
            })?;

        Ok(token_data.claims)
    }
}
