//! Session and navigation flows against an in-memory auth service.
//!
//! Exercises the shell end to end: restore-or-null bootstrap, the
//! post-auth redirect on both paths, best-effort logout, and the
//! advisory navigation gate.

use async_trait::async_trait;
use infonest_app::{
    AppShell, AuthError, AuthService, Credentials, SignupRequest,
};
use infonest_auth::default_dashboard;
use infonest_types::{ClubId, NavParams, PageId, Role, User, UserId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Configurable in-memory stand-in for the real transport.
#[derive(Default)]
struct MockAuth {
    login_user: Option<User>,
    restore_user: Option<User>,
    fail_restore: bool,
    fail_logout: bool,
    logout_calls: AtomicUsize,
}

impl MockAuth {
    fn logging_in(user: User) -> Self {
        Self {
            login_user: Some(user),
            ..Self::default()
        }
    }

    fn restoring(user: User) -> Self {
        Self {
            restore_user: Some(user),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AuthService for MockAuth {
    async fn signup(&self, request: &SignupRequest) -> Result<User, AuthError> {
        let mut user = User::new(
            UserId::new("new-user"),
            request.role,
            request.full_name.clone(),
            request.email.clone(),
        );
        if let Some(club) = &request.club_id {
            user = user.with_club(club.clone());
        }
        Ok(user)
    }

    async fn login(&self, _credentials: &Credentials) -> Result<User, AuthError> {
        self.login_user
            .clone()
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            Err(AuthError::Service("network down".to_owned()))
        } else {
            Ok(())
        }
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        if self.fail_restore {
            return Err(AuthError::Service("session store unreachable".to_owned()));
        }
        Ok(self.restore_user.clone())
    }
}

fn user(role: Role) -> User {
    User::new(UserId::new("u-1"), role, "Test", "test@campus.edu")
}

mod bootstrap {
    use super::*;

    #[tokio::test]
    async fn restored_session_lands_on_role_dashboard() {
        for (role, expected) in [
            (Role::Admin, PageId::AdminDashboard),
            (Role::Faculty, PageId::FacultyDashboard),
            (Role::Office, PageId::VenueBooking),
            (Role::Student, PageId::ClubsLanding),
        ] {
            let mut app = AppShell::new(Arc::new(MockAuth::restoring(user(role))));
            app.bootstrap().await;

            assert!(app.user().is_some());
            assert_eq!(app.current_page(), expected, "role {role}");
        }
    }

    #[tokio::test]
    async fn absent_session_stays_on_boot_page() {
        let mut app = AppShell::new(Arc::new(MockAuth::default()));
        app.bootstrap().await;

        assert!(app.user().is_none());
        assert_eq!(app.current_page(), PageId::Home);
    }

    #[tokio::test]
    async fn restore_failure_is_normalized_to_no_session() {
        let auth = MockAuth {
            fail_restore: true,
            restore_user: Some(user(Role::Admin)),
            ..MockAuth::default()
        };
        let mut app = AppShell::new(Arc::new(auth));
        app.bootstrap().await;

        // Not an error state: unauthenticated, and the resolver would
        // land a visitor on the public club directory.
        assert!(app.user().is_none());
        assert_eq!(default_dashboard(app.user()), PageId::ClubsLanding);
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn fresh_login_and_restore_redirect_identically() {
        let creds = Credentials::new("ada@campus.edu", "hunter2");

        let mut fresh = AppShell::new(Arc::new(MockAuth::logging_in(
            user(Role::Faculty).with_club(ClubId::new("acm")),
        )));
        fresh
            .handle_login(&creds)
            .await
            .expect("login should succeed");

        let mut restored = AppShell::new(Arc::new(MockAuth::restoring(
            user(Role::Faculty).with_club(ClubId::new("acm")),
        )));
        restored.bootstrap().await;

        assert_eq!(fresh.current_page(), restored.current_page());
        assert_eq!(fresh.current_page(), PageId::FacultyDashboard);
    }

    #[tokio::test]
    async fn failed_login_leaves_session_and_page_untouched() {
        let mut app = AppShell::new(Arc::new(MockAuth::default()));
        assert!(app.handle_navigate(PageId::Login, None));

        let err = app
            .handle_login(&Credentials::new("ada@campus.edu", "wrong"))
            .await
            .expect_err("login should fail");

        assert!(matches!(
            err,
            infonest_app::AppError::Auth(AuthError::InvalidCredentials)
        ));
        assert!(app.user().is_none());
        assert_eq!(app.current_page(), PageId::Login);
    }

    #[tokio::test]
    async fn signup_logs_in_and_redirects() {
        let mut app = AppShell::new(Arc::new(MockAuth::default()));
        let request = SignupRequest {
            email: "sam@campus.edu".to_owned(),
            password: "hunter2".to_owned(),
            full_name: "Sam".to_owned(),
            role: Role::Office,
            club_id: None,
            department: Some("Facilities".to_owned()),
        };

        app.handle_signup(&request)
            .await
            .expect("signup should succeed");

        assert_eq!(app.user().map(|u| u.role), Some(Role::Office));
        assert_eq!(app.current_page(), PageId::VenueBooking);
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn remote_failure_still_clears_local_session() {
        let auth = Arc::new(MockAuth {
            restore_user: Some(user(Role::Admin)),
            fail_logout: true,
            ..MockAuth::default()
        });
        let mut app = AppShell::new(auth.clone());
        app.bootstrap().await;
        assert!(app.user().is_some());

        app.handle_logout().await;

        assert!(app.user().is_none());
        assert_eq!(app.current_page(), PageId::Home);
        assert!(app.params().is_none());
        assert_eq!(auth.logout_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let auth = Arc::new(MockAuth::restoring(user(Role::Student)));
        let mut app = AppShell::new(auth.clone());
        app.bootstrap().await;

        app.handle_logout().await;
        assert!(app.user().is_none());

        // Second logout with no active session: still no session, no error.
        app.handle_logout().await;
        assert!(app.user().is_none());
        assert_eq!(auth.logout_calls.load(Ordering::SeqCst), 2);
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn denied_destination_leaves_page_unchanged() {
        let mut app = AppShell::new(Arc::new(MockAuth::restoring(user(Role::Student))));
        app.bootstrap().await;
        assert_eq!(app.current_page(), PageId::ClubsLanding);

        assert!(!app.handle_navigate(PageId::AdminDashboard, None));
        assert!(!app.handle_navigate(PageId::VenueBooking, None));
        assert_eq!(app.current_page(), PageId::ClubsLanding);
    }

    #[tokio::test]
    async fn visitor_reaches_public_pages_only() {
        let mut app = AppShell::new(Arc::new(MockAuth::default()));
        app.bootstrap().await;

        assert!(app.handle_navigate(PageId::Schedule, None));
        assert!(app.handle_navigate(PageId::ClubsLanding, None));
        assert!(!app.handle_navigate(PageId::VenueBooking, None));
        assert!(!app.handle_navigate(PageId::FacultyDashboard, None));
        assert_eq!(app.current_page(), PageId::ClubsLanding);
    }

    #[tokio::test]
    async fn allowed_destination_still_honors_params_invariant() {
        let mut app = AppShell::new(Arc::new(MockAuth::restoring(user(Role::Student))));
        app.bootstrap().await;

        // Club detail is unguarded but requires params.
        assert!(!app.handle_navigate(PageId::ClubDetail, None));
        assert_eq!(app.current_page(), PageId::ClubsLanding);

        let params = NavParams::for_club(ClubId::new("acm"), "technical");
        assert!(app.handle_navigate(PageId::ClubDetail, Some(params)));
        assert_eq!(app.current_page(), PageId::ClubDetail);
        assert_eq!(
            app.params().and_then(infonest_types::NavParams::club_id),
            Some(ClubId::new("acm"))
        );
    }

    #[tokio::test]
    async fn admin_reaches_inherited_dashboards() {
        let mut app = AppShell::new(Arc::new(MockAuth::restoring(user(Role::Admin))));
        app.bootstrap().await;

        assert!(app.handle_navigate(PageId::FacultyDashboard, None));
        assert!(app.handle_navigate(PageId::VenueBooking, None));
        assert!(app.handle_navigate(PageId::AdminDashboard, None));
    }

    #[tokio::test]
    async fn features_follow_session_state() {
        use infonest_auth::Feature;

        let mut app = AppShell::new(Arc::new(MockAuth::restoring(user(Role::Office))));
        assert_eq!(app.available_features(), Feature::empty());

        app.bootstrap().await;
        assert!(app.available_features().contains(Feature::MANAGE_VENUES));

        app.handle_logout().await;
        assert_eq!(app.available_features(), Feature::empty());
    }
}
