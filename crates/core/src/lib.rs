//! Shared primitives for all Rust crates in Rolegate.

#![forbid(unsafe_code)]

/// Identity primitives shared across services.
pub mod auth;

use thiserror::Error;

pub use auth::UserIdentity;

/// Result type used across Rolegate crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// User is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
