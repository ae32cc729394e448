//! Permission predicates.
//!
//! Pure boolean answers over `(Option<&User>, optional club)`. Denial
//! is a plain `false`, never an error: callers branch on the value
//! (hide a button, refuse a navigation) rather than catch anything.
//!
//! These checks are advisory defense-in-depth — the render layer is
//! expected to never offer an action they would deny — and they are the
//! single source of truth for what each role may do.
//!
//! # The club-scoped rule
//!
//! `can_manage_club`, `can_create_events`, `can_manage_events` and
//! `can_view_applications` all share one underlying rule: admin always,
//! faculty only for the club they advise. It is written once
//! ([`club_scoped`]) with several call sites, so the rules cannot
//! drift apart.

use crate::Feature;
use infonest_types::{rank_of, ClubId, Role, User};

/// Returns `true` if `user` meets the seniority floor `required`.
///
/// `required = None` is the unauthenticated floor and is met by every
/// authenticated user. A `None` user meets no non-`None` floor.
///
/// Rank is a coarse gate only: office meets the faculty *floor* (same
/// rank) but does not hold faculty's club capabilities — those are
/// separate predicates.
///
/// # Example
///
/// ```
/// use infonest_auth::has_minimum_role;
/// use infonest_types::{Role, User, UserId};
///
/// let student = User::new(UserId::new("u-1"), Role::Student, "Sam", "sam@campus.edu");
/// assert!(has_minimum_role(Some(&student), Some(Role::Student)));
/// assert!(!has_minimum_role(Some(&student), Some(Role::Faculty)));
/// assert!(!has_minimum_role(None, Some(Role::Student)));
/// assert!(has_minimum_role(Some(&student), None));
/// ```
#[must_use]
pub fn has_minimum_role(user: Option<&User>, required: Option<Role>) -> bool {
    match user {
        Some(user) => user.role.rank() >= rank_of(required),
        None => false,
    }
}

/// The shared club-scoped rule: admin always; faculty for their own club.
///
/// Student and office are excluded regardless of any club id, as is a
/// faculty user with no (or blank) club assignment.
fn club_scoped(user: Option<&User>, club: Option<&ClubId>) -> bool {
    let Some(user) = user else {
        return false;
    };
    match user.role {
        Role::Admin => true,
        Role::Faculty => club.is_some_and(|club| user.advises(club)),
        Role::Student | Role::Office => false,
    }
}

/// Returns `true` if `user` may manage the given club.
///
/// Admin manages every club; a faculty advisor manages exactly the club
/// they are assigned to.
///
/// # Example
///
/// ```
/// use infonest_auth::can_manage_club;
/// use infonest_types::{ClubId, Role, User, UserId};
///
/// let advisor = User::new(UserId::new("u-1"), Role::Faculty, "Ada", "ada@campus.edu")
///     .with_club(ClubId::new("acm"));
/// assert!(can_manage_club(Some(&advisor), &ClubId::new("acm")));
/// assert!(!can_manage_club(Some(&advisor), &ClubId::new("ieee")));
/// ```
#[must_use]
pub fn can_manage_club(user: Option<&User>, club: &ClubId) -> bool {
    club_scoped(user, Some(club))
}

/// Returns `true` if `user` may create events for `club`.
///
/// Same rule as [`can_manage_club`]; a non-admin caller with no club
/// parameter is always denied.
#[must_use]
pub fn can_create_events(user: Option<&User>, club: Option<&ClubId>) -> bool {
    club_scoped(user, club)
}

/// Alias of [`can_create_events`]: managing events is the same grant.
#[must_use]
pub fn can_manage_events(user: Option<&User>, club: Option<&ClubId>) -> bool {
    can_create_events(user, club)
}

/// Returns `true` if `user` may review membership applications for `club`.
#[must_use]
pub fn can_view_applications(user: Option<&User>, club: Option<&ClubId>) -> bool {
    club_scoped(user, club)
}

/// Returns `true` if `user` may manage venues and bookings.
///
/// Admin and office only. Faculty are excluded regardless of their
/// club assignment.
#[must_use]
pub fn can_manage_venues(user: Option<&User>) -> bool {
    matches!(
        user.map(|u| u.role),
        Some(Role::Admin | Role::Office)
    )
}

/// Returns `true` if `user` may edit the campus schedule.
#[must_use]
pub fn can_update_schedule(user: Option<&User>) -> bool {
    matches!(
        user.map(|u| u.role),
        Some(Role::Admin | Role::Faculty | Role::Office)
    )
}

/// Returns `true` if `user` may browse the club directory.
///
/// Authenticated floor: every role qualifies.
#[must_use]
pub fn can_view_clubs(user: Option<&User>) -> bool {
    user.is_some()
}

/// Returns `true` if `user` may register for events (authenticated floor).
#[must_use]
pub fn can_register_for_events(user: Option<&User>) -> bool {
    user.is_some()
}

/// Returns `true` if `user` may view the campus schedule (authenticated floor).
#[must_use]
pub fn can_view_schedule(user: Option<&User>) -> bool {
    user.is_some()
}

/// Computes the feature set granted to `user`.
///
/// Tiers layer by seniority: the student tier for everyone
/// authenticated, the faculty tier for faculty rank and above (admin
/// inherits it), plus the role-exclusive admin or office tier. A `None`
/// user holds the empty set.
///
/// # Example
///
/// ```
/// use infonest_auth::{available_features, Feature};
/// use infonest_types::{Role, User, UserId};
///
/// let admin = User::new(UserId::new("u-1"), Role::Admin, "Max", "max@campus.edu");
/// let features = available_features(Some(&admin));
/// assert!(features.contains(Feature::STUDENT_TIER));
/// assert!(features.contains(Feature::FACULTY_TIER));
/// assert!(features.contains(Feature::SYSTEM_SETTINGS));
///
/// assert_eq!(available_features(None), Feature::empty());
/// ```
#[must_use]
pub fn available_features(user: Option<&User>) -> Feature {
    let mut features = Feature::empty();

    if has_minimum_role(user, Some(Role::Student)) {
        features |= Feature::STUDENT_TIER;
    }
    if has_minimum_role(user, Some(Role::Faculty)) {
        features |= Feature::FACULTY_TIER;
    }
    match user.map(|u| u.role) {
        Some(Role::Admin) => features |= Feature::ADMIN_TIER,
        Some(Role::Office) => features |= Feature::OFFICE_TIER,
        _ => {}
    }

    features
}

/// Returns the one-line description of a role's access level.
///
/// A fixed "No permissions" string is returned for `None`.
#[must_use]
pub const fn permission_description(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => {
            "Full system access - Can manage all clubs, events, users, and settings"
        }
        Some(Role::Faculty) => {
            "Club management access - Can manage assigned club events and review applications"
        }
        Some(Role::Student) => "Standard access - Can view and register for events",
        Some(Role::Office) => "Administrative access - Can manage venues and schedules",
        None => "No permissions",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infonest_types::UserId;

    fn user(role: Role) -> User {
        User::new(UserId::new("u-1"), role, "Test", "test@campus.edu")
    }

    fn advisor(club: &str) -> User {
        user(Role::Faculty).with_club(ClubId::new(club))
    }

    #[test]
    fn minimum_role_floor() {
        for role in Role::ALL {
            let u = user(role);
            // Everyone authenticated meets the None floor and the student floor.
            assert!(has_minimum_role(Some(&u), None));
            assert!(has_minimum_role(Some(&u), Some(Role::Student)));
            // Nobody unauthenticated meets any non-None floor.
            assert!(!has_minimum_role(None, Some(role)));
        }
        assert!(!has_minimum_role(
            Some(&user(Role::Student)),
            Some(Role::Faculty)
        ));
        // Office meets the faculty floor (same rank) — rank is seniority only.
        assert!(has_minimum_role(
            Some(&user(Role::Office)),
            Some(Role::Faculty)
        ));
    }

    #[test]
    fn manage_club_admin_and_own_club_only() {
        let acm = ClubId::new("acm");
        let ieee = ClubId::new("ieee");

        assert!(can_manage_club(Some(&user(Role::Admin)), &acm));
        assert!(can_manage_club(Some(&advisor("acm")), &acm));
        assert!(!can_manage_club(Some(&advisor("acm")), &ieee));
        assert!(!can_manage_club(Some(&user(Role::Student)), &acm));
        assert!(!can_manage_club(Some(&user(Role::Office)), &acm));
        assert!(!can_manage_club(None, &acm));
    }

    #[test]
    fn faculty_without_club_manages_nothing() {
        let acm = ClubId::new("acm");
        assert!(!can_manage_club(Some(&user(Role::Faculty)), &acm));

        let blank = user(Role::Faculty).with_club(ClubId::new(""));
        assert!(!can_manage_club(Some(&blank), &acm));
        assert!(!can_create_events(Some(&blank), Some(&acm)));
        // The student-level floor still applies.
        assert!(can_view_clubs(Some(&blank)));
        assert!(can_register_for_events(Some(&blank)));
    }

    #[test]
    fn create_events_requires_club_for_non_admin() {
        let acm = ClubId::new("acm");
        // Scenario A: student never creates events.
        assert!(!can_create_events(Some(&user(Role::Student)), Some(&acm)));
        // Scenario B: faculty only for their own club.
        assert!(can_create_events(Some(&advisor("acm")), Some(&acm)));
        assert!(!can_create_events(
            Some(&advisor("acm")),
            Some(&ClubId::new("ieee"))
        ));
        // Absent club parameter denies non-admin callers.
        assert!(!can_create_events(Some(&advisor("acm")), None));
        assert!(can_create_events(Some(&user(Role::Admin)), None));
        // Scenario E: office never creates events.
        assert!(!can_create_events(Some(&user(Role::Office)), Some(&acm)));
    }

    #[test]
    fn manage_events_is_same_rule_as_create() {
        let acm = ClubId::new("acm");
        let admin = user(Role::Admin);
        let ada = advisor("acm");
        let cases: [(Option<&User>, Option<&ClubId>); 4] = [
            (Some(&admin), None),
            (None, Some(&acm)),
            (Some(&ada), Some(&acm)),
            (Some(&ada), None),
        ];
        for (u, c) in cases {
            assert_eq!(can_manage_events(u, c), can_create_events(u, c));
        }
    }

    #[test]
    fn view_applications_follows_club_rule() {
        let acm = ClubId::new("acm");
        assert!(can_view_applications(Some(&user(Role::Admin)), None));
        assert!(can_view_applications(Some(&advisor("acm")), Some(&acm)));
        assert!(!can_view_applications(Some(&user(Role::Office)), Some(&acm)));
        assert!(!can_view_applications(Some(&user(Role::Student)), Some(&acm)));
    }

    #[test]
    fn venues_admin_and_office_only() {
        assert!(can_manage_venues(Some(&user(Role::Admin))));
        assert!(can_manage_venues(Some(&user(Role::Office))));
        assert!(!can_manage_venues(Some(&advisor("acm"))));
        assert!(!can_manage_venues(Some(&user(Role::Student))));
        assert!(!can_manage_venues(None));
    }

    #[test]
    fn schedule_update_excludes_students() {
        assert!(can_update_schedule(Some(&user(Role::Admin))));
        assert!(can_update_schedule(Some(&user(Role::Faculty))));
        assert!(can_update_schedule(Some(&user(Role::Office))));
        assert!(!can_update_schedule(Some(&user(Role::Student))));
        assert!(!can_update_schedule(None));
    }

    #[test]
    fn floor_capabilities_track_authentication() {
        for role in Role::ALL {
            let u = user(role);
            assert!(can_view_clubs(Some(&u)));
            assert!(can_register_for_events(Some(&u)));
            assert!(can_view_schedule(Some(&u)));
        }
        assert!(!can_view_clubs(None));
        assert!(!can_register_for_events(None));
        assert!(!can_view_schedule(None));
    }

    #[test]
    fn feature_sets_nest_by_rank() {
        let student = available_features(Some(&user(Role::Student)));
        let faculty = available_features(Some(&advisor("acm")));
        let admin = available_features(Some(&user(Role::Admin)));

        assert!(faculty.contains(student));
        assert!(admin.contains(faculty));
        assert_eq!(available_features(None), Feature::empty());
    }

    #[test]
    fn office_features_layer_faculty_tier_via_rank_floor() {
        // Office's rank passes the faculty floor, so the layered set
        // includes the faculty tokens on top of its own tier.
        let office = available_features(Some(&user(Role::Office)));
        assert_eq!(
            office,
            Feature::STUDENT_TIER | Feature::FACULTY_TIER | Feature::OFFICE_TIER
        );
        // But no admin-only tokens.
        assert!(!office.contains(Feature::MANAGE_USERS));
        assert!(!office.contains(Feature::MANAGE_ALL_CLUBS));
        assert!(!office.contains(Feature::SYSTEM_SETTINGS));
    }

    #[test]
    fn office_feature_tokens_do_not_grant_club_predicates() {
        // Holding the faculty feature tokens is a menu-level grant; the
        // club-scoped predicates still deny office outright.
        let office = user(Role::Office);
        let acm = ClubId::new("acm");
        assert!(available_features(Some(&office)).contains(Feature::MANAGE_EVENTS));
        assert!(!can_create_events(Some(&office), Some(&acm)));
        assert!(!can_manage_club(Some(&office), &acm));
        assert!(!can_view_applications(Some(&office), Some(&acm)));
    }

    #[test]
    fn descriptions_are_fixed_per_role() {
        for role in Role::ALL {
            assert!(!permission_description(Some(role)).is_empty());
        }
        assert_eq!(permission_description(None), "No permissions");
    }
}
