//! Password verification seam.

use async_trait::async_trait;

use socia_core::result::AppResult;
use socia_entity::user::UserRecord;

/// Checks a submitted password against a user-store record.
///
/// No implementation ships with the gate: the store's credential format is
/// owned by the collaborator and no hashing scheme is assumed here.
#[async_trait]
pub trait PasswordVerifier: Send + Sync + 'static {
    /// Returns `Ok(true)` when the password matches the record.
    async fn verify(&self, record: &UserRecord, password: &str) -> AppResult<bool>;
}
