//! Failure taxonomy of the session gate.

use thiserror::Error;

use socia_core::AppError;

/// Message shown for every rejected login, whatever the cause.
pub const GENERIC_LOGIN_FAILURE: &str = "Invalid email or password";

/// Everything that can go wrong between a login form and a rendered page.
///
/// Only [`AuthError::Upstream`] is a server fault; the other variants are
/// ordinary user-recoverable outcomes.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password missing or blank.
    #[error("email and password are required")]
    MalformedCredentials,
    /// No identity matches the submitted credentials.
    #[error("no identity matches the submitted credentials")]
    NoMatchingIdentity,
    /// The session token failed signature, format, or expiry checks.
    #[error("session is invalid or expired: {0}")]
    InvalidOrExpiredSession(String),
    /// A collaborator (user store, token signer) failed.
    #[error(transparent)]
    Upstream(#[from] AppError),
}

impl AuthError {
    /// Whether the caller should see the generic login failure.
    pub fn is_login_rejection(&self) -> bool {
        matches!(self, Self::MalformedCredentials | Self::NoMatchingIdentity)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MalformedCredentials | AuthError::NoMatchingIdentity => {
                AppError::authentication(GENERIC_LOGIN_FAILURE)
            }
            AuthError::InvalidOrExpiredSession(_) => {
                AppError::authentication("Session is invalid or expired")
            }
            AuthError::Upstream(e) => e,
        }
    }
}
