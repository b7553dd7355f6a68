//! Seed data for the in-memory user store.

use serde::{Deserialize, Serialize};

/// User records loaded into the store at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStoreConfig {
    /// Records keyed by email once loaded.
    #[serde(default)]
    pub seed: Vec<SeedUser>,
}

/// One user record as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// Stable user id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role name (`ADMIN`, `MANAGER`, `MEMBER`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "MEMBER".to_string()
}
