//! Feature (capability token) flags.
//!
//! A [`Feature`] names something a user may do on the platform. The set
//! a user holds is derived from their role by
//! [`available_features`](crate::available_features), never stored.
//!
//! # Tiers
//!
//! Features layer by rank floor: the student tier for everyone
//! authenticated, the faculty tier for faculty rank and above (both
//! office and admin meet that floor), plus the role-exclusive admin or
//! office additions. The tier consts below are the *increments*, not
//! the full set a role ends up with — `OFFICE_TIER` is what office adds
//! on top of the student and faculty tiers it already holds.
//!
//! | Tier | Features |
//! |------|----------|
//! | [`STUDENT_TIER`](Feature::STUDENT_TIER) | `view-clubs`, `register-events`, `view-schedule`, `view-venues` |
//! | [`FACULTY_TIER`](Feature::FACULTY_TIER) | `manage-events`, `review-applications`, `update-schedule` |
//! | [`ADMIN_TIER`](Feature::ADMIN_TIER) | `manage-all-clubs`, `manage-users`, `system-settings`, `manage-venues` |
//! | [`OFFICE_TIER`](Feature::OFFICE_TIER) | `manage-venues`, `update-schedule` |
//!
//! Being bitflags, the union of overlapping tiers (office and admin
//! both carry `manage-venues`) is still a set — no token appears twice.
//!
//! # Example
//!
//! ```
//! use infonest_auth::Feature;
//!
//! let office = Feature::OFFICE_TIER;
//! assert!(office.contains(Feature::MANAGE_VENUES));
//! assert!(!office.contains(Feature::MANAGE_EVENTS));
//!
//! // Tokens use the platform's kebab-case wire names
//! assert_eq!(Feature::parse("manage-venues"), Some(Feature::MANAGE_VENUES));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Capability tokens grantable to a user by role.
    ///
    /// Token names are the kebab-case strings the render layer keys
    /// menu items on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Feature: u16 {
        /// Browse the club directory: `view-clubs`
        const VIEW_CLUBS          = 0b0000_0000_0001;
        /// Register for events: `register-events`
        const REGISTER_EVENTS     = 0b0000_0000_0010;
        /// View the campus schedule: `view-schedule`
        const VIEW_SCHEDULE       = 0b0000_0000_0100;
        /// View venue availability: `view-venues`
        const VIEW_VENUES         = 0b0000_0000_1000;
        /// Create and edit events for the assigned club: `manage-events`
        const MANAGE_EVENTS       = 0b0000_0001_0000;
        /// Review membership applications: `review-applications`
        const REVIEW_APPLICATIONS = 0b0000_0010_0000;
        /// Edit the campus schedule: `update-schedule`
        const UPDATE_SCHEDULE     = 0b0000_0100_0000;
        /// Manage every club: `manage-all-clubs`
        const MANAGE_ALL_CLUBS    = 0b0000_1000_0000;
        /// Manage user accounts: `manage-users`
        const MANAGE_USERS        = 0b0001_0000_0000;
        /// Platform settings: `system-settings`
        const SYSTEM_SETTINGS     = 0b0010_0000_0000;
        /// Manage venues and bookings: `manage-venues`
        const MANAGE_VENUES       = 0b0100_0000_0000;
    }
}

impl Feature {
    /// The floor granted to every authenticated role.
    pub const STUDENT_TIER: Self = Self::VIEW_CLUBS
        .union(Self::REGISTER_EVENTS)
        .union(Self::VIEW_SCHEDULE)
        .union(Self::VIEW_VENUES);

    /// Added for faculty and above (admin inherits this tier).
    pub const FACULTY_TIER: Self = Self::MANAGE_EVENTS
        .union(Self::REVIEW_APPLICATIONS)
        .union(Self::UPDATE_SCHEDULE);

    /// Admin-only additions.
    pub const ADMIN_TIER: Self = Self::MANAGE_ALL_CLUBS
        .union(Self::MANAGE_USERS)
        .union(Self::SYSTEM_SETTINGS)
        .union(Self::MANAGE_VENUES);

    /// Office-only additions (office also holds the student and
    /// faculty tiers via the rank floor).
    pub const OFFICE_TIER: Self = Self::MANAGE_VENUES.union(Self::UPDATE_SCHEDULE);

    /// Returns the kebab-case tokens of the set features.
    ///
    /// # Example
    ///
    /// ```
    /// use infonest_auth::Feature;
    ///
    /// let caps = Feature::VIEW_CLUBS | Feature::MANAGE_VENUES;
    /// assert_eq!(caps.names(), vec!["view-clubs", "manage-venues"]);
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        const TOKENS: [(Feature, &str); 11] = [
            (Feature::VIEW_CLUBS, "view-clubs"),
            (Feature::REGISTER_EVENTS, "register-events"),
            (Feature::VIEW_SCHEDULE, "view-schedule"),
            (Feature::VIEW_VENUES, "view-venues"),
            (Feature::MANAGE_EVENTS, "manage-events"),
            (Feature::REVIEW_APPLICATIONS, "review-applications"),
            (Feature::UPDATE_SCHEDULE, "update-schedule"),
            (Feature::MANAGE_ALL_CLUBS, "manage-all-clubs"),
            (Feature::MANAGE_USERS, "manage-users"),
            (Feature::SYSTEM_SETTINGS, "system-settings"),
            (Feature::MANAGE_VENUES, "manage-venues"),
        ];
        TOKENS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, token)| *token)
            .collect()
    }

    /// Parses a single token (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use infonest_auth::Feature;
    ///
    /// assert_eq!(Feature::parse("view-clubs"), Some(Feature::VIEW_CLUBS));
    /// assert_eq!(Feature::parse("Manage-Events"), Some(Feature::MANAGE_EVENTS));
    /// assert_eq!(Feature::parse("teleport"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "view-clubs" => Some(Self::VIEW_CLUBS),
            "register-events" => Some(Self::REGISTER_EVENTS),
            "view-schedule" => Some(Self::VIEW_SCHEDULE),
            "view-venues" => Some(Self::VIEW_VENUES),
            "manage-events" => Some(Self::MANAGE_EVENTS),
            "review-applications" => Some(Self::REVIEW_APPLICATIONS),
            "update-schedule" => Some(Self::UPDATE_SCHEDULE),
            "manage-all-clubs" => Some(Self::MANAGE_ALL_CLUBS),
            "manage-users" => Some(Self::MANAGE_USERS),
            "system-settings" => Some(Self::SYSTEM_SETTINGS),
            "manage-venues" => Some(Self::MANAGE_VENUES),
            _ => None,
        }
    }

    /// Parses a list of tokens into a combined set.
    ///
    /// Returns the combined features and the unknown tokens; callers
    /// decide whether unknowns are an error or a warning.
    #[must_use]
    pub fn parse_list<'a>(tokens: &[&'a str]) -> (Self, Vec<&'a str>) {
        let mut features = Self::empty();
        let mut unknown = Vec::new();
        for token in tokens {
            match Self::parse(token) {
                Some(f) => features |= f,
                None => unknown.push(*token),
            }
        }
        (features, unknown)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}
