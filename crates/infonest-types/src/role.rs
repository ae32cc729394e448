//! Role (institutional function) types.
//!
//! A [`Role`] describes a user's institutional function on the campus
//! platform, separating "who the user is" from "what they may do".
//!
//! # Rank vs Capability
//!
//! Each role carries a numeric [`rank`](Role::rank) used for coarse
//! "at least this seniority" checks:
//!
//! ```text
//! admin (3)  >  faculty (2) = office (2)  >  student (1)  >  none (0)
//! ```
//!
//! Rank is **not** a capability order. Faculty and office share rank 2
//! but hold disjoint capability sets (club/event management vs
//! venue/schedule management). Rank alone must only ever decide the
//! minimum-role floor check; every role-specific capability is its own
//! named predicate in `infonest-auth`.
//!
//! # Example
//!
//! ```
//! use infonest_types::Role;
//!
//! assert!(Role::Admin.rank() > Role::Faculty.rank());
//! assert_eq!(Role::Faculty.rank(), Role::Office.rank());
//! assert!(Role::Office.rank() > Role::Student.rank());
//!
//! // Wire form is lowercase
//! assert_eq!(Role::Faculty.to_string(), "faculty");
//! assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user's institutional function.
///
/// The set is closed: every authenticated user holds exactly one of
/// these four roles. An unauthenticated visitor is represented by the
/// *absence* of a user (`Option::None` at call sites), never by a role
/// variant.
///
/// Serializes as the lowercase wire name (`"student"`, `"faculty"`,
/// `"admin"`, `"office"`) used by the platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Standard member: browse clubs, register for events, view schedules.
    Student,
    /// Club advisor: manages the single club assigned via `User::club_id`.
    Faculty,
    /// Platform administrator: full access across clubs, users and venues.
    Admin,
    /// Campus office staff: venue and schedule management.
    Office,
}

impl Role {
    /// All roles, in ascending rank order (office listed after faculty).
    pub const ALL: [Self; 4] = [Self::Student, Self::Faculty, Self::Office, Self::Admin];

    /// Returns the seniority rank of this role.
    ///
    /// Used only for minimum-role floor checks. Office deliberately
    /// shares faculty's rank while holding different capabilities.
    ///
    /// # Example
    ///
    /// ```
    /// use infonest_types::Role;
    ///
    /// assert_eq!(Role::Admin.rank(), 3);
    /// assert_eq!(Role::Faculty.rank(), 2);
    /// assert_eq!(Role::Office.rank(), 2);
    /// assert_eq!(Role::Student.rank(), 1);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Admin => 3,
            Self::Faculty | Self::Office => 2,
            Self::Student => 1,
        }
    }

    /// Returns the lowercase wire name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
            Self::Office => "office",
        }
    }
}

/// Returns the rank of an optional role, treating `None` as 0.
///
/// The unauthenticated floor: any authenticated role outranks it.
///
/// # Example
///
/// ```
/// use infonest_types::{rank_of, Role};
///
/// assert_eq!(rank_of(None), 0);
/// assert_eq!(rank_of(Some(Role::Student)), 1);
/// ```
#[must_use]
pub const fn rank_of(role: Option<Role>) -> u8 {
    match role {
        Some(r) => r.rank(),
        None => 0,
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}` (expected student, faculty, admin or office)")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    /// Parses a role name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "admin" => Ok(Self::Admin),
            "office" => Ok(Self::Office),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}
