//! Authentication service seam.
//!
//! [`AuthService`] is the contract the session controller requires from
//! the outside world. The real implementation (REST client, mock
//! backend) lives outside this workspace; tests provide an in-memory
//! stub. The trait is object-safe so the controller can hold it as
//! `Arc<dyn AuthService>`.

use async_trait::async_trait;
use infonest_types::{ClubId, ErrorCode, Role, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by authentication operations.
///
/// Propagated to the caller of `login`/`signup`; the consuming UI
/// displays the message and leaves the user on the current page. The
/// core never retries.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Email/password/role combination rejected by the backend.
    #[error("invalid email, password or role")]
    InvalidCredentials,

    /// Signup attempted for an already-registered email.
    #[error("an account already exists for {email}")]
    DuplicateAccount {
        /// The email that was already taken.
        email: String,
    },

    /// The request payload failed backend validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport or backend failure unrelated to the credentials.
    #[error("auth service unavailable: {0}")]
    Service(String),
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::DuplicateAccount { .. } => "AUTH_DUPLICATE_ACCOUNT",
            Self::Validation(_) => "AUTH_VALIDATION",
            Self::Service(_) => "AUTH_SERVICE_UNAVAILABLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

/// Login request payload.
///
/// `role` is optional: the staff login screen pre-selects one, the
/// generic login screen lets the backend infer it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Expected role, when the login screen is role-specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Credentials {
    /// Creates credentials without a role hint.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    /// Sets the expected role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// Account creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub full_name: String,
    /// Requested role.
    pub role: Role,
    /// Club assignment, for faculty signups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<ClubId>,
    /// Department, for office and student signups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// External authentication collaborator.
///
/// # Contract
///
/// - `login`/`signup` return the authenticated [`User`] or a typed
///   [`AuthError`]; they never partially succeed.
/// - `logout` is best-effort: a `Service` error is acceptable and the
///   caller must still clear its local session.
/// - `current_user` restores a persisted session; `Ok(None)` means no
///   session. Callers treat *any* error as "no session" as well.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account and logs it in.
    async fn signup(&self, request: &SignupRequest) -> Result<User, AuthError>;

    /// Authenticates and returns the resolved user.
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Signs the current session out remotely.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Restores a previously persisted session, if any.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;
}
