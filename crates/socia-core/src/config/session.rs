//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// How the session token is carried by the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCookieConfig {
    /// Cookie name holding the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the cookie `Secure` (HTTPS only).
    #[serde(default)]
    pub secure: bool,
    /// Also accept `Authorization: Bearer <token>` in place of the cookie.
    #[serde(default = "default_true")]
    pub accept_bearer: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure: false,
            accept_bearer: true,
        }
    }
}

fn default_cookie_name() -> String {
    "socia.session-token".to_string()
}

fn default_true() -> bool {
    true
}
