//! User identity type.
//!
//! A [`User`] is the identity resolved by a successful login or session
//! restore. The core holds at most one active `User` (in the session
//! controller) and derives every capability from it on demand; nothing
//! about permissions is stored on the user itself.

use crate::{ClubId, Role, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated platform user.
///
/// # Club assignment
///
/// `club_id` associates a faculty advisor with the one club they
/// manage. Upstream payloads encode "no club assigned" either as an
/// absent field or as an empty string; [`club_id`](Self::club_id)
/// normalizes both to `None`, so a faculty user with a blank club id is
/// treated exactly like an unassigned one by every club-scoped
/// predicate (they keep the student-level floor capabilities).
///
/// # Example
///
/// ```
/// use infonest_types::{ClubId, Role, User, UserId};
///
/// let advisor = User::new(UserId::new("u-1"), Role::Faculty, "Ada", "ada@campus.edu")
///     .with_club(ClubId::new("acm"));
/// assert_eq!(advisor.club_id().map(ClubId::as_str), Some("acm"));
///
/// let unassigned = User::new(UserId::new("u-2"), Role::Faculty, "Grace", "grace@campus.edu")
///     .with_club(ClubId::new(""));
/// assert_eq!(unassigned.club_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-issued account id.
    pub id: UserId,
    /// Institutional role.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Club this user advises (faculty only; may be absent or blank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    club_id: Option<ClubId>,
    /// Department (used by office and student accounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    /// Creates a user with no club assignment or department.
    #[must_use]
    pub fn new(
        id: UserId,
        role: Role,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            role,
            name: name.into(),
            email: email.into(),
            club_id: None,
            department: None,
        }
    }

    /// Sets the advised club.
    #[must_use]
    pub fn with_club(mut self, club: ClubId) -> Self {
        self.club_id = Some(club);
        self
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Returns the advised club, normalizing blank ids to `None`.
    #[must_use]
    pub fn club_id(&self) -> Option<&ClubId> {
        self.club_id.as_ref().filter(|c| !c.is_blank())
    }

    /// Returns `true` if this user advises the given club.
    #[must_use]
    pub fn advises(&self, club: &ClubId) -> bool {
        self.club_id().is_some_and(|own| own == club)
    }
}
