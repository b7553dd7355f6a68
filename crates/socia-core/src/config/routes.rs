//! Route classification and redirect configuration.

use serde::{Deserialize, Serialize};

/// Which paths require a session and where unauthenticated users are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Path prefixes that require a valid session.
    #[serde(default = "default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,
    /// Path prefixes the guard never evaluates (always public).
    #[serde(default = "default_exempt_prefixes")]
    pub exempt_prefixes: Vec<String>,
    /// Target of the redirect issued for unauthenticated protected requests.
    #[serde(default = "default_redirect_path")]
    pub redirect_path: String,
    /// Login page path.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Landing page for authenticated users.
    #[serde(default = "default_home_path")]
    pub authenticated_home: String,
    /// Send authenticated users away from the login page.
    #[serde(default)]
    pub redirect_authenticated_from_login: bool,
    /// Where logout sends the browser.
    #[serde(default = "default_redirect_path")]
    pub logout_redirect_path: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: default_protected_prefixes(),
            exempt_prefixes: default_exempt_prefixes(),
            redirect_path: default_redirect_path(),
            login_path: default_login_path(),
            authenticated_home: default_home_path(),
            redirect_authenticated_from_login: false,
            logout_redirect_path: default_redirect_path(),
        }
    }
}

fn default_protected_prefixes() -> Vec<String> {
    vec!["/dashboard".to_string()]
}

fn default_exempt_prefixes() -> Vec<String> {
    vec![
        "/api".to_string(),
        "/static".to_string(),
        "/images".to_string(),
        "/favicon.ico".to_string(),
    ]
}

fn default_redirect_path() -> String {
    "/".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/dashboard".to_string()
}
