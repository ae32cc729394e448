//! Dashboard resolution.
//!
//! Decides where a user lands after authentication and whether a named
//! page is reachable for them. Both functions match exhaustively over
//! [`Role`] and [`PageId`], so adding a role or a page forces a
//! routing decision here.
//!
//! # Advisory gating
//!
//! [`can_access_dashboard`] is UI gating, not a firewall: a denial
//! means the caller leaves the current page unchanged and should never
//! have offered the destination. Pages without a listed requirement
//! are reachable by design — only known-sensitive destinations are
//! guarded.

use infonest_types::{PageId, Role, User};

/// Returns the landing page for `user` after authentication.
///
/// Total over the role set plus `None`: a visitor or student lands on
/// the club directory, each staff role on its own dashboard.
///
/// # Example
///
/// ```
/// use infonest_auth::default_dashboard;
/// use infonest_types::{PageId, Role, User, UserId};
///
/// assert_eq!(default_dashboard(None), PageId::ClubsLanding);
///
/// let office = User::new(UserId::new("u-1"), Role::Office, "Sam", "sam@campus.edu");
/// assert_eq!(default_dashboard(Some(&office)), PageId::VenueBooking);
/// ```
#[must_use]
pub fn default_dashboard(user: Option<&User>) -> PageId {
    match user.map(|u| u.role) {
        Some(Role::Admin) => PageId::AdminDashboard,
        Some(Role::Faculty) => PageId::FacultyDashboard,
        Some(Role::Office) => PageId::VenueBooking,
        Some(Role::Student) | None => PageId::ClubsLanding,
    }
}

/// Returns `true` if `user` may reach `page`.
///
/// Guarded destinations:
///
/// | Page | Requirement |
/// |------|-------------|
/// | `admin-dashboard` | admin |
/// | `faculty-dashboard` | admin or faculty |
/// | `venue-booking` | admin, office or faculty |
///
/// Everything else — including `clubs-landing`, `student-dashboard`
/// and `schedule` — is reachable by anyone, authenticated or not.
///
/// # Example
///
/// ```
/// use infonest_auth::can_access_dashboard;
/// use infonest_types::{PageId, Role, User, UserId};
///
/// let admin = User::new(UserId::new("u-1"), Role::Admin, "Max", "max@campus.edu");
/// assert!(can_access_dashboard(Some(&admin), PageId::FacultyDashboard));
/// assert!(!can_access_dashboard(None, PageId::VenueBooking));
/// assert!(can_access_dashboard(None, PageId::ClubsLanding));
/// ```
#[must_use]
pub fn can_access_dashboard(user: Option<&User>, page: PageId) -> bool {
    let role = user.map(|u| u.role);
    match page {
        PageId::AdminDashboard => matches!(role, Some(Role::Admin)),
        PageId::FacultyDashboard => matches!(role, Some(Role::Admin | Role::Faculty)),
        PageId::VenueBooking => {
            matches!(role, Some(Role::Admin | Role::Office | Role::Faculty))
        }
        PageId::ClubsLanding | PageId::StudentDashboard | PageId::Schedule => true,
        // Unguarded destinations are reachable by design.
        PageId::Home
        | PageId::ClubCategory
        | PageId::ClubDetail
        | PageId::ClubLogin
        | PageId::StudentRegistration
        | PageId::ScheduleUpdate
        | PageId::Login
        | PageId::Signup => true,
    }
}
