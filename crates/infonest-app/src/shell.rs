//! Application shell.
//!
//! [`AppShell`] is the application root owning the two pieces of
//! mutable core state — the session (via
//! [`SessionController`]) and the navigation pair (via
//! [`Navigator`]) — and the glue between them.
//!
//! # Flow
//!
//! ```text
//! bootstrap() ──► SessionController::bootstrap ──► User | None
//!                                                     │
//!                      default_dashboard(user) ◄──────┘
//!                                │
//! handle_login() ──► login ──────┤  (same redirect on both paths)
//!                                ▼
//!                      Navigator::navigate
//!
//! handle_navigate(page) ──► can_access_dashboard? ──► navigate | unchanged
//! handle_logout() ──► logout (always clears) ──► Navigator::reset
//! ```
//!
//! The render layer consumes `(current_page, params, user)` and
//! re-enters through these handlers.

use crate::{
    AppError, AuthService, Credentials, Navigator, SessionController, SignupRequest,
};
use infonest_auth::{available_features, can_access_dashboard, default_dashboard, Feature};
use infonest_types::{NavParams, PageId, User};
use std::sync::Arc;
use tracing::debug;

/// Application root: session + navigation, wired through the resolver.
///
/// # Example
///
/// ```no_run
/// use infonest_app::{AppShell, Credentials};
/// use infonest_types::PageId;
/// # async fn demo(auth: std::sync::Arc<dyn infonest_app::AuthService>) -> Result<(), infonest_app::AppError> {
/// let mut app = AppShell::new(auth);
///
/// // Startup: restore-or-null, then land on the role's dashboard.
/// app.bootstrap().await;
///
/// if app.user().is_none() {
///     app.handle_login(&Credentials::new("ada@campus.edu", "hunter2")).await?;
/// }
///
/// // Advisory gate: denied destinations leave the page unchanged.
/// let moved = app.handle_navigate(PageId::AdminDashboard, None);
/// # let _ = moved; Ok(())
/// # }
/// ```
pub struct AppShell {
    session: SessionController,
    navigator: Navigator,
}

impl AppShell {
    /// Creates a shell on the boot page with no session.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            session: SessionController::new(auth),
            navigator: Navigator::new(),
        }
    }

    /// Returns the active user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Returns the current page.
    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.navigator.current_page()
    }

    /// Returns the current navigation parameters, if any.
    #[must_use]
    pub fn params(&self) -> Option<&NavParams> {
        self.navigator.params()
    }

    /// Returns the feature set of the active user (empty when none).
    #[must_use]
    pub fn available_features(&self) -> Feature {
        available_features(self.user())
    }

    /// Startup: restore the session and apply the post-auth redirect.
    ///
    /// A restored user lands on their default dashboard; a failed or
    /// absent restore stays on the boot page. Never errors.
    pub async fn bootstrap(&mut self) {
        if let Some(user) = self.session.bootstrap().await {
            self.redirect_to_dashboard(&user);
        }
    }

    /// Logs in and applies the post-auth redirect.
    ///
    /// # Errors
    ///
    /// Propagates the authentication failure; the current page and
    /// session are left untouched.
    pub async fn handle_login(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        let user = self.session.login(credentials).await?;
        self.redirect_to_dashboard(&user);
        Ok(())
    }

    /// Signs up (which also logs in) and applies the post-auth redirect.
    ///
    /// # Errors
    ///
    /// Propagates the signup failure; the current page and session are
    /// left untouched.
    pub async fn handle_signup(&mut self, request: &SignupRequest) -> Result<(), AppError> {
        let user = self.session.signup(request).await?;
        self.redirect_to_dashboard(&user);
        Ok(())
    }

    /// Signs out and returns to the boot page.
    ///
    /// The local session is always cleared, even when the remote
    /// sign-out fails; navigation state is reset afterwards, so a
    /// logout issued during any other in-flight operation still ends
    /// unauthenticated on the boot page.
    pub async fn handle_logout(&mut self) {
        self.session.logout().await;
        self.navigator.reset();
    }

    /// Navigation request from the render layer.
    ///
    /// Consults the dashboard resolver first: a denied destination
    /// returns `false` and leaves the current page unchanged. Allowed
    /// destinations still honor the navigator's params invariant.
    pub fn handle_navigate(&mut self, page: PageId, params: Option<NavParams>) -> bool {
        if !can_access_dashboard(self.user(), page) {
            debug!(page = %page, "navigation denied");
            return false;
        }
        self.navigator.navigate(page, params)
    }

    /// The single post-auth redirect rule, identical on fresh-login
    /// and restored-session paths.
    fn redirect_to_dashboard(&mut self, user: &User) {
        let dashboard = default_dashboard(Some(user));
        self.navigator.navigate(dashboard, None);
    }
}

impl std::fmt::Debug for AppShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppShell")
            .field("session", &self.session)
            .field("navigator", &self.navigator)
            .finish()
    }
}
