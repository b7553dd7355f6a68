//! Session cookie reading and writing.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use socia_auth::IssuedSession;
use socia_core::config::SessionCookieConfig;

/// Pulls the session token from the cookie, or from a Bearer header when
/// allowed. Empty values count as absent.
pub fn session_token(
    config: &SessionCookieConfig,
    jar: &CookieJar,
    headers: &HeaderMap,
) -> Option<String> {
    if let Some(cookie) = jar.get(&config.cookie_name) {
        let value = cookie.value();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    if !config.accept_bearer {
        return None;
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Cookie carrying a freshly issued session.
pub fn session_cookie(config: &SessionCookieConfig, session: &IssuedSession) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(session.max_age_seconds))
        .secure(config.secure)
        .build()
}

/// Cookie that makes the browser drop the session.
///
/// Added to the jar rather than removed from it so the removal is sent even
/// when the request carried no cookie.
pub fn removal_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build();
    cookie.make_removal();
    cookie
}
