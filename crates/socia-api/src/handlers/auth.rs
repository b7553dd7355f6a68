//! Auth handlers — login (JSON and form), logout, session.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::CookieJar;
use tracing::{debug, info};
use validator::Validate;

use socia_auth::{AuthError, LoginOutcome};
use socia_core::error::AppError;

use crate::cookie::{removal_cookie, session_cookie};
use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, SessionResponse};
use crate::extractors::MaybeUser;
use crate::state::AppState;

/// Query value appended to the login page after a rejected form login.
pub const LOGIN_ERROR_CODE: &str = "CredentialsSignin";

/// POST /api/auth/login
///
/// Every rejection, including an unreadable body, is the same 401.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable login body");
            LoginRequest::default()
        }
    };

    let outcome = authenticate(&state, &req).await?;
    let jar = jar.add(session_cookie(&state.config.session, &outcome.session));

    let body = ApiResponse::ok(SessionResponse {
        user: outcome.identity,
        expires_at: outcome.session.expires_at,
    });

    Ok((jar, Json(body)).into_response())
}

/// POST /login
///
/// Browser form variant: redirects to the dashboard on success and back to
/// the login page with an error code on rejection.
pub async fn login_form(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Form<LoginRequest>, FormRejection>,
) -> Result<Response, AppError> {
    let req = match payload {
        Ok(Form(req)) => req,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable login form");
            LoginRequest::default()
        }
    };

    let routes = &state.config.routes;
    match authenticate(&state, &req).await {
        Ok(outcome) => {
            let jar = jar.add(session_cookie(&state.config.session, &outcome.session));
            Ok((jar, Redirect::to(&routes.authenticated_home)).into_response())
        }
        Err(e) if e.is_login_rejection() => {
            let target = format!("{}?error={}", routes.login_path, LOGIN_ERROR_CODE);
            Ok(Redirect::to(&target).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST|GET /api/auth/logout
///
/// Tokens are stateless, so logging out means dropping the cookie.
pub async fn logout(
    State(state): State<AppState>,
    MaybeUser(claims): MaybeUser,
    jar: CookieJar,
) -> Response {
    if let Some(claims) = &claims {
        info!(user_id = %claims.sub, jti = %claims.jti, "Logout");
    }

    let jar = jar.add(removal_cookie(&state.config.session));
    let target = &state.config.routes.logout_redirect_path;

    (jar, Redirect::to(target)).into_response()
}

/// GET /api/auth/session
pub async fn session(MaybeUser(claims): MaybeUser) -> Json<ApiResponse<Option<SessionResponse>>> {
    Json(ApiResponse::ok(claims.as_ref().map(SessionResponse::from)))
}

async fn authenticate(state: &AppState, req: &LoginRequest) -> Result<LoginOutcome, AuthError> {
    if let Err(e) = req.validate() {
        debug!(error = %e, "Login request failed validation");
        return Err(AuthError::MalformedCredentials);
    }
    state.gate.login(&req.email, &req.password).await
}
