//! The external user-record store, keyed by email.

pub mod memory;

use async_trait::async_trait;

use socia_core::result::AppResult;
use socia_entity::user::UserRecord;

pub use memory::InMemoryUserStore;

/// Lookup interface for user records.
///
/// The store's schema and access protocol belong to the collaborator; the
/// gate only ever asks for a record by email.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a record by email (case-insensitive). `None` when absent.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;
}
