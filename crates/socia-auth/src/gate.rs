//! The session gate: authorizer, issuer, and guard behind one handle.

use std::sync::Arc;

use tracing::{debug, info, warn};

use socia_core::config::AppConfig;
use socia_core::result::AppResult;
use socia_entity::user::Identity;

use crate::authorizer::CredentialAuthorizer;
use crate::error::AuthError;
use crate::guard::{GuardDecision, GuardState, RouteGuard};
use crate::session::{IssuedSession, SessionClaims, SessionDecoder, SessionEncoder};
use crate::store::UserStore;

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Who logged in.
    pub identity: Identity,
    /// The session to hand back to the client.
    pub session: IssuedSession,
}

/// Everything the HTTP layer needs to log users in and guard routes.
#[derive(Debug, Clone)]
pub struct SessionGate {
    authorizer: Arc<CredentialAuthorizer>,
    encoder: SessionEncoder,
    decoder: SessionDecoder,
    guard: RouteGuard,
}

impl SessionGate {
    /// Assembles a gate from its parts.
    pub fn new(
        authorizer: Arc<CredentialAuthorizer>,
        encoder: SessionEncoder,
        decoder: SessionDecoder,
        guard: RouteGuard,
    ) -> Self {
        Self {
            authorizer,
            encoder,
            decoder,
            guard,
        }
    }

    /// Builds a gate from application configuration and a user store.
    pub fn from_config(config: &AppConfig, store: Arc<dyn UserStore>) -> AppResult<Self> {
        let authorizer = CredentialAuthorizer::new(&config.auth, store)?;
        Ok(Self::new(
            Arc::new(authorizer),
            SessionEncoder::new(&config.auth),
            SessionDecoder::new(&config.auth),
            RouteGuard::from_config(&config.routes)?,
        ))
    }

    /// The route guard.
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// The token encoder.
    pub fn encoder(&self) -> &SessionEncoder {
        &self.encoder
    }

    /// Authorizes credentials and issues a session.
    ///
    /// "No match" becomes [`AuthError::NoMatchingIdentity`]; no session is
    /// issued in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let identity = match self.authorizer.authorize(email, password).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                info!("Login rejected: no matching identity");
                return Err(AuthError::NoMatchingIdentity);
            }
            Err(e) => {
                if e.is_login_rejection() {
                    info!(error = %e, "Login rejected");
                } else {
                    warn!(error = %e, "Login failed");
                }
                return Err(e);
            }
        };

        let session = self.encoder.issue(&identity)?;
        info!(user_id = %identity.id, expires_at = %session.expires_at, "Login successful");

        Ok(LoginOutcome { identity, session })
    }

    /// Verifies a token, if any. Any failure reads as "no session".
    pub fn resolve(&self, token: Option<&str>) -> Option<SessionClaims> {
        let token = token?;
        match self.decoder.decode(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "Ignoring session token");
                None
            }
        }
    }

    /// Decides pass or redirect for a path and an optional token.
    pub fn evaluate(&self, path: &str, token: Option<&str>) -> (GuardDecision, Option<SessionClaims>) {
        let claims = self.resolve(token);
        let state = if claims.is_some() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        };
        (self.guard.evaluate(path, state), claims)
    }
}
