//! Session lifecycle.
//!
//! [`SessionController`] owns the single active-[`User`] slot for one
//! client run. Every other component only reads it; the controller is
//! the only writer.
//!
//! # Failure normalization
//!
//! | Operation | Remote failure | Local effect |
//! |-----------|----------------|--------------|
//! | [`bootstrap`](SessionController::bootstrap) | swallowed, logged | no session |
//! | [`login`](SessionController::login) | propagated | session untouched |
//! | [`logout`](SessionController::logout) | swallowed, logged | session **always** cleared |
//!
//! The logout rule is a resilience contract: a broken network must
//! never leave a stale session active client-side.
//!
//! # Serialization of mutations
//!
//! Session-mutating operations take `&mut self`, so within the
//! single-threaded UI event model no two of them can overlap; the
//! borrow checker enforces what the spec's "single in-flight
//! operation" model assumes.

use crate::{AuthError, AuthService, Credentials, SignupRequest};
use infonest_types::User;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owner of the active user slot.
///
/// # Example
///
/// ```no_run
/// use infonest_app::{Credentials, SessionController};
/// # async fn demo(auth: std::sync::Arc<dyn infonest_app::AuthService>) {
/// let mut session = SessionController::new(auth);
///
/// // Restore-or-null on startup; never errors.
/// let restored = session.bootstrap().await;
///
/// if restored.is_none() {
///     let creds = Credentials::new("ada@campus.edu", "hunter2");
///     match session.login(&creds).await {
///         Ok(user) => println!("welcome {}", user.name),
///         Err(err) => eprintln!("{err}"),
///     }
/// }
/// # }
/// ```
pub struct SessionController {
    auth: Arc<dyn AuthService>,
    user: Option<User>,
}

impl SessionController {
    /// Creates a controller with no active session.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth, user: None }
    }

    /// Returns the active user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns `true` if a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Attempts to restore a persisted session.
    ///
    /// Any restoration failure is logged and normalized to "no
    /// session" — this never errors outward. Returns the restored user
    /// so the caller can apply the post-auth redirect.
    pub async fn bootstrap(&mut self) -> Option<User> {
        match self.auth.current_user().await {
            Ok(Some(user)) => {
                debug!(user = %user.id, role = %user.role, "session restored");
                self.user = Some(user.clone());
                Some(user)
            }
            Ok(None) => {
                debug!("no persisted session");
                None
            }
            Err(err) => {
                warn!(error = %err, "session restore failed; continuing unauthenticated");
                None
            }
        }
    }

    /// Authenticates and stores the resulting user.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] from the service; the active session is
    /// left untouched on failure.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = self.auth.login(credentials).await?;
        debug!(user = %user.id, role = %user.role, "login succeeded");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Creates an account and stores the resulting user.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] from the service; the active session is
    /// left untouched on failure.
    pub async fn signup(&mut self, request: &SignupRequest) -> Result<User, AuthError> {
        let user = self.auth.signup(request).await?;
        debug!(user = %user.id, role = %user.role, "signup succeeded");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Signs out.
    ///
    /// Remote sign-out is best-effort: failure is logged, never
    /// surfaced. The local slot is cleared unconditionally, and calling
    /// this with no active session is a no-op.
    pub async fn logout(&mut self) {
        if let Err(err) = self.auth.logout().await {
            warn!(error = %err, "remote logout failed; clearing local session anyway");
        }
        self.user = None;
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
