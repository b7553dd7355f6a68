//! The route guard's allow/redirect decision.

use tracing::debug;

use socia_core::config::RouteConfig;
use socia_core::error::AppError;

use super::classification::{RouteClass, RouteTable};

/// Whether the current request carries a valid session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// No token, or a malformed, tampered, or expired one.
    Unauthenticated,
    /// A token that verified.
    Authenticated,
}

/// What to do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view unchanged.
    Pass,
    /// Do not render; send the browser to this path.
    Redirect(String),
}

/// Decides pass or redirect for a path given the session state.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    table: RouteTable,
    redirect_path: String,
    login_path: String,
    authenticated_home: String,
    redirect_authenticated_from_login: bool,
}

impl RouteGuard {
    /// Creates a guard from the `[routes]` configuration section.
    ///
    /// Refuses a redirect target that is itself protected, which would loop.
    pub fn from_config(config: &RouteConfig) -> Result<Self, AppError> {
        let table = RouteTable::from_config(config);

        if table.classify(&config.redirect_path) == RouteClass::Protected {
            return Err(AppError::configuration(format!(
                "routes.redirect_path '{}' is itself protected",
                config.redirect_path
            )));
        }
        if config.redirect_authenticated_from_login
            && config.authenticated_home == config.login_path
        {
            return Err(AppError::configuration(
                "routes.authenticated_home must differ from routes.login_path",
            ));
        }

        Ok(Self {
            table,
            redirect_path: config.redirect_path.clone(),
            login_path: config.login_path.clone(),
            authenticated_home: config.authenticated_home.clone(),
            redirect_authenticated_from_login: config.redirect_authenticated_from_login,
        })
    }

    /// Evaluates one request.
    pub fn evaluate(&self, path: &str, state: GuardState) -> GuardDecision {
        let class = self.table.classify(path);

        let decision = match (class, state) {
            (RouteClass::Protected, GuardState::Unauthenticated) => {
                GuardDecision::Redirect(self.redirect_path.clone())
            }
            (RouteClass::Public, GuardState::Authenticated)
                if self.redirect_authenticated_from_login && path == self.login_path =>
            {
                GuardDecision::Redirect(self.authenticated_home.clone())
            }
            _ => GuardDecision::Pass,
        };

        debug!(path, ?class, ?state, ?decision, "Route guard evaluated");
        decision
    }
}
