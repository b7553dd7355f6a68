//! # socia-core
//!
//! Core crate for the SOCIA dashboard. Contains configuration schemas and
//! the loader, the unified error system, and its HTTP mapping.
//!
//! This crate has **no** internal dependencies on other SOCIA crates.

pub mod config;
pub mod error;
pub mod response;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
