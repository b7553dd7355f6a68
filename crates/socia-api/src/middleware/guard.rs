//! Route guard middleware.
//!
//! Runs before routing on every request: reads the session token, verifies
//! it, and either redirects or lets the request through with the verified
//! claims attached as a request extension.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::debug;

use socia_auth::GuardDecision;

use crate::cookie::session_token;
use crate::state::AppState;

/// Applies the route guard decision to a request.
///
/// Missing, malformed, and expired tokens all behave like no token; there is
/// no error response from this layer.
pub async fn route_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(&state.config.session, &jar, request.headers());
    let path = request.uri().path().to_string();

    let (decision, claims) = state.gate.evaluate(&path, token.as_deref());

    match decision {
        GuardDecision::Redirect(target) => {
            debug!(path = %path, target = %target, "Redirecting guarded request");
            Redirect::temporary(&target).into_response()
        }
        GuardDecision::Pass => {
            if let Some(claims) = claims {
                request.extensions_mut().insert(claims);
            }
            next.run(request).await
        }
    }
}
