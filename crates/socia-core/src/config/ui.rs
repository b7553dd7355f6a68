//! Dashboard view defaults.

use serde::{Deserialize, Serialize};

/// Initial values for per-request view state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Unread notification badge count shown in the header.
    #[serde(default = "default_unread")]
    pub unread_notifications: u32,
    /// Whether the sidebar starts collapsed.
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            unread_notifications: default_unread(),
            sidebar_collapsed: false,
        }
    }
}

fn default_unread() -> u32 {
    3
}
