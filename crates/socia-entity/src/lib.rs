//! # socia-entity
//!
//! Domain models shared by the auth and API crates. Nothing here is
//! persisted by SOCIA itself: an [`user::Identity`] only lives inside a
//! signed session token, and a [`user::UserRecord`] belongs to the
//! external user store.

pub mod user;
