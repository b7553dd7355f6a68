//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder session secret that must be replaced outside development.
pub const PLACEHOLDER_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Longest accepted session lifetime (ten years).
pub const MAX_SESSION_MAX_AGE_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Credential and session-token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_session_secret")]
    pub session_secret: String,
    /// Session token lifetime in seconds (30 days by default).
    #[serde(default = "default_session_max_age")]
    pub session_max_age_seconds: u64,
    /// Clock-skew leeway applied when checking token expiry.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Accept user-store matches when no password verifier is installed.
    ///
    /// The store lookup never checked passwords; this keeps that behaviour
    /// reachable but explicit.
    #[serde(default = "default_true")]
    pub allow_unverified_store_login: bool,
    /// Hardcoded development login.
    #[serde(default)]
    pub dev_login: DevLoginConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: default_session_secret(),
            session_max_age_seconds: default_session_max_age(),
            leeway_seconds: 0,
            allow_unverified_store_login: true,
            dev_login: DevLoginConfig::default(),
        }
    }
}

/// A single credential pair that always authorizes to a fixed identity.
///
/// Disabled unless explicitly switched on; refused in production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevLoginConfig {
    /// Whether the bypass is active.
    #[serde(default)]
    pub enabled: bool,
    /// Email that triggers the bypass.
    #[serde(default = "default_dev_email")]
    pub email: String,
    /// Password that triggers the bypass.
    #[serde(default = "default_dev_password")]
    pub password: String,
    /// Identity id issued on bypass.
    #[serde(default = "default_dev_id")]
    pub id: String,
    /// Display name issued on bypass.
    #[serde(default = "default_dev_name")]
    pub name: String,
    /// Role issued on bypass.
    #[serde(default = "default_dev_role")]
    pub role: String,
}

impl Default for DevLoginConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            email: default_dev_email(),
            password: default_dev_password(),
            id: default_dev_id(),
            name: default_dev_name(),
            role: default_dev_role(),
        }
    }
}

fn default_session_secret() -> String {
    PLACEHOLDER_SECRET.to_string()
}

fn default_session_max_age() -> u64 {
    30 * 24 * 60 * 60
}

fn default_true() -> bool {
    true
}

fn default_dev_email() -> String {
    "admin@agency.com".to_string()
}

fn default_dev_password() -> String {
    "password".to_string()
}

fn default_dev_id() -> String {
    "1".to_string()
}

fn default_dev_name() -> String {
    "Admin User".to_string()
}

fn default_dev_role() -> String {
    "ADMIN".to_string()
}
