//! Convenience result type alias for SOCIA.

use crate::error::AppError;

/// A specialized `Result` type for SOCIA operations.
pub type AppResult<T> = Result<T, AppError>;
