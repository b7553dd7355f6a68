//! In-memory user store seeded from configuration.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use socia_core::config::UserStoreConfig;
use socia_core::result::AppResult;
use socia_entity::user::UserRecord;

use super::UserStore;

/// Read-only user store backed by a map of lower-cased email to record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    /// Builds a store from records. Later duplicates replace earlier ones.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users = records
            .into_iter()
            .map(|record| (record.email.to_lowercase(), record))
            .collect();
        Self { users }
    }

    /// Builds a store from the `[users]` configuration section.
    pub fn from_config(config: &UserStoreConfig) -> AppResult<Self> {
        let records = config
            .seed
            .iter()
            .map(UserRecord::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        debug!(count = records.len(), "Seeded in-memory user store");
        Ok(Self::new(records))
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self.users.get(&email.trim().to_lowercase()).cloned())
    }
}
