//! Per-request dashboard view state.
//!
//! Active client, sidebar state, and the notification badge are UI
//! ephemera. They are rebuilt on every request from query parameters and
//! configuration defaults and passed to rendering explicitly.

use serde::Deserialize;

use socia_core::config::UiConfig;

/// Query parameters understood by dashboard pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    /// Active client id.
    pub client: Option<String>,
    /// `collapsed` or `expanded`.
    pub sidebar: Option<String>,
}

/// View state handed to page rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    /// Client selected in the header switcher.
    pub active_client_id: Option<String>,
    /// Whether the sidebar is collapsed.
    pub sidebar_collapsed: bool,
    /// Unread notification badge count.
    pub unread_notifications: u32,
}

impl ViewContext {
    /// Combines configuration defaults with request overrides.
    pub fn resolve(ui: &UiConfig, query: &ViewQuery) -> Self {
        let sidebar_collapsed = match query.sidebar.as_deref() {
            Some("collapsed") => true,
            Some("expanded") => false,
            _ => ui.sidebar_collapsed,
        };

        Self {
            active_client_id: query.client.clone().filter(|c| !c.is_empty()),
            sidebar_collapsed,
            unread_notifications: ui.unread_notifications,
        }
    }

    /// Selects a client, replacing any query-provided one.
    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        self.active_client_id = Some(client_id.into());
        self
    }
}
