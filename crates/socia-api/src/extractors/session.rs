//! Session extractors fed by the route guard middleware.
//!
//! The guard verifies the token once per request and stores the resulting
//! [`SessionClaims`] in request extensions; these extractors only read them.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use socia_auth::SessionClaims;
use socia_core::error::AppError;
use socia_entity::user::Identity;

/// The signed-in user. Rejects with 401 when there is no valid session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl CurrentUser {
    /// The session identity.
    pub fn identity(&self) -> Identity {
        self.0.identity()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::authentication("Not signed in"))
    }
}

/// The signed-in user, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionClaims>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<SessionClaims>().cloned()))
    }
}
