//! The credential authorizer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use socia_core::config::AuthConfig;
use socia_core::result::AppResult;
use socia_entity::user::{Identity, UserRole};

use crate::error::AuthError;
use crate::store::UserStore;

use super::verifier::PasswordVerifier;

/// The enabled development credential pair and the identity it yields.
#[derive(Debug, Clone)]
struct DevLogin {
    email: String,
    password: String,
    identity: Identity,
}

/// Turns an (email, password) pair into an [`Identity`] or "no match".
///
/// Bad credentials are never an error: they come back as `Ok(None)`. Only
/// missing fields ([`AuthError::MalformedCredentials`]) and store failures
/// are errors.
#[derive(Clone)]
pub struct CredentialAuthorizer {
    dev_login: Option<DevLogin>,
    store: Arc<dyn UserStore>,
    verifier: Option<Arc<dyn PasswordVerifier>>,
    allow_unverified_store_login: bool,
}

impl std::fmt::Debug for CredentialAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAuthorizer")
            .field("dev_login_enabled", &self.dev_login.is_some())
            .field("store", &self.store)
            .field("has_verifier", &self.verifier.is_some())
            .field(
                "allow_unverified_store_login",
                &self.allow_unverified_store_login,
            )
            .finish()
    }
}

impl CredentialAuthorizer {
    /// Creates an authorizer from auth configuration and a user store.
    ///
    /// Fails only when the configured dev login role does not parse.
    pub fn new(config: &AuthConfig, store: Arc<dyn UserStore>) -> AppResult<Self> {
        let dev_login = if config.dev_login.enabled {
            let dev = &config.dev_login;
            let role: UserRole = dev.role.parse()?;
            warn!(email = %dev.email, "Development login bypass is enabled");
            Some(DevLogin {
                email: dev.email.clone(),
                password: dev.password.clone(),
                identity: Identity::new(&dev.id, &dev.name, &dev.email, role),
            })
        } else {
            None
        };

        Ok(Self {
            dev_login,
            store,
            verifier: None,
            allow_unverified_store_login: config.allow_unverified_store_login,
        })
    }

    /// Installs a password verifier for store-backed logins.
    pub fn with_verifier(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Authorizes a login attempt.
    ///
    /// 1. The dev login pair, when enabled, matches exactly and wins.
    /// 2. Blank email or password is malformed input.
    /// 3. The store is asked for the email; absence is "no match".
    /// 4. A found record is checked by the verifier, or accepted or refused
    ///    per `allow_unverified_store_login` when none is installed.
    pub async fn authorize(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Identity>, AuthError> {
        if let Some(dev) = &self.dev_login {
            if email == dev.email && password == dev.password {
                info!(user_id = %dev.identity.id, "Authorized via development login");
                return Ok(Some(dev.identity.clone()));
            }
        }

        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MalformedCredentials);
        }

        let Some(record) = self.store.find_by_email(email).await? else {
            debug!("No user record for submitted email");
            return Ok(None);
        };

        let accepted = match &self.verifier {
            Some(verifier) => verifier.verify(&record, password).await?,
            None if self.allow_unverified_store_login => {
                warn!(
                    user_id = %record.id,
                    "Accepting store login without password verification"
                );
                true
            }
            None => false,
        };

        if !accepted {
            debug!(user_id = %record.id, "Store login refused");
            return Ok(None);
        }

        info!(user_id = %record.id, "Authorized via user store");
        Ok(Some(record.to_identity()))
    }
}
