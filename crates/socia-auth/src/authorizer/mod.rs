//! Credential authorization: dev login bypass, then user-store lookup.

pub mod credential;
pub mod verifier;

pub use credential::CredentialAuthorizer;
pub use verifier::PasswordVerifier;
