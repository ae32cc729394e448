//! Identifier types for InfoNest.
//!
//! All identifiers are opaque strings minted by the backend; the client
//! never generates them. Newtypes keep a user id from being passed
//! where a club id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps a backend-issued user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier for a club (e.g. `"acm"`, `"ieee"`).
///
/// Club ids key the resource-ownership relation between a faculty
/// advisor and the single club they manage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(String);

impl ClubId {
    /// Wraps a backend-issued club id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the id is empty or whitespace-only.
    ///
    /// Such ids come from upstream payloads where "no club assigned"
    /// is encoded as an empty string; [`crate::User::club_id`]
    /// normalizes them to `None`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClubId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
