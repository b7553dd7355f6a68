//! # socia-auth
//!
//! The session gate for the SOCIA dashboard.
//!
//! ## Modules
//!
//! - `authorizer` — credential checks against the dev login and the user store
//! - `session` — signed, stateless session tokens (JWT) and their claims
//! - `guard` — route classification and the allow/redirect decision
//! - `store` — the user-store seam and its in-memory implementation
//! - `gate` — ties the three together for the HTTP layer

pub mod authorizer;
pub mod error;
pub mod gate;
pub mod guard;
pub mod session;
pub mod store;

pub use authorizer::{CredentialAuthorizer, PasswordVerifier};
pub use error::AuthError;
pub use gate::{LoginOutcome, SessionGate};
pub use guard::{GuardDecision, GuardState, RouteClass, RouteGuard, RouteTable};
pub use session::{IssuedSession, SessionClaims, SessionDecoder, SessionEncoder};
pub use store::{InMemoryUserStore, UserStore};
