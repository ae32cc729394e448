//! Page identifiers and navigation parameters.
//!
//! [`PageId`] names every screen the front end can show. The set is
//! closed so that the dashboard resolver matches exhaustively: adding a
//! page forces a decision about who may reach it.
//!
//! [`NavParams`] is the untyped parameter bag carried alongside the
//! current page (e.g. `{ "clubId": "acm", "category": "technical" }`),
//! with typed accessors for the keys the core itself inspects.

use crate::ClubId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for a reachable screen.
///
/// Wire form is the kebab-case page name used by the render layer
/// (`"clubs-landing"`, `"admin-dashboard"`, ...).
///
/// # Example
///
/// ```
/// use infonest_types::PageId;
///
/// assert_eq!(PageId::ClubsLanding.to_string(), "clubs-landing");
/// assert_eq!("venue-booking".parse::<PageId>(), Ok(PageId::VenueBooking));
/// assert!(PageId::ClubDetail.requires_params());
/// assert!(!PageId::Schedule.requires_params());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    /// Public landing screen; the boot page.
    Home,
    /// Club directory; default dashboard for students and visitors.
    ClubsLanding,
    /// Clubs filtered by category. Requires a `category` param.
    ClubCategory,
    /// Single club view. Requires a `clubId` param.
    ClubDetail,
    /// Campus-wide schedule, readable by anyone.
    Schedule,
    /// Role-selection login screen for club staff.
    ClubLogin,
    /// Event registration form for students.
    StudentRegistration,
    /// Alias landing for student accounts.
    StudentDashboard,
    /// Club management dashboard for faculty advisors.
    FacultyDashboard,
    /// Platform administration dashboard.
    AdminDashboard,
    /// Schedule editing screen.
    ScheduleUpdate,
    /// Venue booking and management; default dashboard for office staff.
    VenueBooking,
    /// Credential login screen.
    Login,
    /// Account creation screen.
    Signup,
}

impl PageId {
    /// All pages, for exhaustive iteration in tests.
    pub const ALL: [Self; 14] = [
        Self::Home,
        Self::ClubsLanding,
        Self::ClubCategory,
        Self::ClubDetail,
        Self::Schedule,
        Self::ClubLogin,
        Self::StudentRegistration,
        Self::StudentDashboard,
        Self::FacultyDashboard,
        Self::AdminDashboard,
        Self::ScheduleUpdate,
        Self::VenueBooking,
        Self::Login,
        Self::Signup,
    ];

    /// Returns the kebab-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ClubsLanding => "clubs-landing",
            Self::ClubCategory => "club-category",
            Self::ClubDetail => "club-detail",
            Self::Schedule => "schedule",
            Self::ClubLogin => "club-login",
            Self::StudentRegistration => "student-registration",
            Self::StudentDashboard => "student-dashboard",
            Self::FacultyDashboard => "faculty-dashboard",
            Self::AdminDashboard => "admin-dashboard",
            Self::ScheduleUpdate => "schedule-update",
            Self::VenueBooking => "venue-booking",
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    /// Returns `true` if this page cannot render without parameters.
    ///
    /// The navigator refuses (no-op) a transition to such a page when
    /// no [`NavParams`] are supplied.
    #[must_use]
    pub const fn requires_params(self) -> bool {
        matches!(self, Self::ClubCategory | Self::ClubDetail)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown page name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct PageParseError(pub String);

impl FromStr for PageId {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| PageParseError(s.to_owned()))
    }
}

/// The untyped parameter bag carried with a navigation.
///
/// Page-specific views read arbitrary keys out of the bag; the core
/// only ever inspects `clubId` and `category`.
///
/// # Example
///
/// ```
/// use infonest_types::{ClubId, NavParams};
///
/// let params = NavParams::for_club(ClubId::new("acm"), "technical");
/// assert_eq!(params.club_id(), Some(ClubId::new("acm")));
/// assert_eq!(params.category(), Some("technical"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavParams(Map<String, Value>);

impl NavParams {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a category listing.
    #[must_use]
    pub fn for_category(category: impl Into<String>) -> Self {
        Self::new().with("category", Value::String(category.into()))
    }

    /// Parameters for a single-club view (club plus its category).
    #[must_use]
    pub fn for_club(club: ClubId, category: impl Into<String>) -> Self {
        Self::new()
            .with("clubId", Value::String(club.as_str().to_owned()))
            .with("category", Value::String(category.into()))
    }

    /// Inserts an arbitrary key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Reads an arbitrary key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads the `clubId` key, if present and a string.
    #[must_use]
    pub fn club_id(&self) -> Option<ClubId> {
        self.0
            .get("clubId")
            .and_then(Value::as_str)
            .map(ClubId::new)
    }

    /// Reads the `category` key, if present and a string.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.0.get("category").and_then(Value::as_str)
    }
}
