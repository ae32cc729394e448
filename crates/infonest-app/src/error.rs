//! Application-level error type.
//!
//! [`AppError`] unifies the shell layer's failures for the render
//! layer. Authorization denials are **not** errors — they are `false`
//! returns from the decision layer.

use crate::AuthError;
use infonest_types::ErrorCode;
use thiserror::Error;

/// Unified shell-layer error.
///
/// # Example
///
/// ```
/// use infonest_app::{AppError, AuthError};
/// use infonest_types::ErrorCode;
///
/// let err: AppError = AuthError::InvalidCredentials.into();
/// assert_eq!(err.code(), "AUTH_INVALID_CREDENTIALS");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Shell configuration problem.
    #[error("config error: {0}")]
    Config(String),
}

impl ErrorCode for AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.code(),
            Self::Config(_) => "APP_CONFIG_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Auth(e) => e.is_recoverable(),
            Self::Config(_) => false,
        }
    }
}
