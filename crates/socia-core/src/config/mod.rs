//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so that an empty
//! configuration source is valid.

pub mod app;
pub mod auth;
pub mod logging;
pub mod routes;
pub mod session;
pub mod ui;
pub mod users;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, DevLoginConfig};
pub use self::logging::LoggingConfig;
pub use self::routes::RouteConfig;
pub use self::session::SessionCookieConfig;
pub use self::ui::UiConfig;
pub use self::users::{SeedUser, UserStoreConfig};

use crate::error::AppError;

/// Environment name under which development shortcuts are refused.
pub const PRODUCTION_ENV: &str = "production";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Credential and token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session cookie settings.
    #[serde(default)]
    pub session: SessionCookieConfig,
    /// Route classification and redirect targets.
    #[serde(default)]
    pub routes: RouteConfig,
    /// Seed records for the in-memory user store.
    #[serde(default)]
    pub users: UserStoreConfig,
    /// Dashboard view defaults.
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// `config/{env}` and environment variables prefixed with `SOCIA_`
    /// (nested keys separated by `__`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from(Path::new("config"), env, None)
    }

    /// Load configuration from `dir`, overriding the process environment
    /// with `vars` when given.
    pub fn load_from(
        dir: &Path,
        env: &str,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(env)).required(false))
            .add_source(
                config::Environment::with_prefix("SOCIA")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate(env)?;
        Ok(config)
    }

    /// Rejects configurations that are unsafe for the given environment.
    ///
    /// In `production` the development login bypass must be disabled and the
    /// session secret must be changed from its placeholder.
    pub fn validate(&self, env: &str) -> Result<(), AppError> {
        if self.auth.session_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.session_secret must not be empty"));
        }
        if self.auth.session_max_age_seconds == 0
            || self.auth.session_max_age_seconds > auth::MAX_SESSION_MAX_AGE_SECONDS
        {
            return Err(AppError::configuration(format!(
                "auth.session_max_age_seconds must be between 1 and {}",
                auth::MAX_SESSION_MAX_AGE_SECONDS
            )));
        }
        if !is_cookie_name(&self.session.cookie_name) {
            return Err(AppError::configuration(format!(
                "session.cookie_name '{}' is not a valid cookie name",
                self.session.cookie_name
            )));
        }

        if env != PRODUCTION_ENV {
            return Ok(());
        }

        if self.auth.dev_login.enabled {
            return Err(AppError::configuration(
                "auth.dev_login.enabled must be false in production",
            ));
        }
        if self.auth.session_secret == auth::PLACEHOLDER_SECRET {
            return Err(AppError::configuration(
                "auth.session_secret must be set in production",
            ));
        }

        Ok(())
    }
}

/// RFC 6265 cookie-name token: visible ASCII without separators.
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic()
                && !matches!(
                    b,
                    b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\'
                        | b'"' | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}'
                )
        })
}
