//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use socia_auth::SessionGate;
use socia_auth::store::UserStore;
use socia_core::config::AppConfig;
use socia_core::result::AppResult;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Immutable after
/// construction; all fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Authorizer, session issuer, and route guard
    pub gate: Arc<SessionGate>,
}

impl AppState {
    /// Builds state from configuration and a user store.
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>) -> AppResult<Self> {
        let gate = SessionGate::from_config(&config, store)?;
        Ok(Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
        })
    }
}
