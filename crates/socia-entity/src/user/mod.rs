//! User domain entities.

pub mod identity;
pub mod record;
pub mod role;

pub use identity::Identity;
pub use record::UserRecord;
pub use role::UserRole;
