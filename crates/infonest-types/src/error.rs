//! Unified error interface for InfoNest.
//!
//! All error types in the workspace implement [`ErrorCode`] so the
//! render layer can branch on stable machine-readable codes instead of
//! matching display strings.
//!
//! # Example
//!
//! ```
//! use infonest_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum FetchError {
//!     NotFound,
//!     Timeout,
//! }
//!
//! impl ErrorCode for FetchError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::NotFound => "NOT_FOUND",
//!             Self::Timeout => "TIMEOUT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//! }
//!
//! assert_eq!(FetchError::Timeout.code(), "TIMEOUT");
//! assert!(FetchError::Timeout.is_recoverable());
//! ```

/// Stable machine-readable error codes.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"AUTH_INVALID_CREDENTIALS"`
/// - **Namespace-prefixed**: `AUTH_`, `APP_`
/// - **Stable**: codes are an API contract and do not change once
///   defined
///
/// # Recoverability
///
/// An error is recoverable when retrying the same operation can
/// plausibly succeed (transient transport failures); it is not when the
/// input itself is at fault (bad credentials, validation).
pub trait ErrorCode {
    /// Returns the stable machine-readable code.
    fn code(&self) -> &'static str;

    /// Returns `true` if retrying may succeed.
    fn is_recoverable(&self) -> bool;
}
