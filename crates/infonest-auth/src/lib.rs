//! Permission primitives for InfoNest.
//!
//! This crate is the pure decision layer of the platform: every
//! function here is a side-effect-free answer to "may this user do
//! that", computed on demand from the user's [`Role`] and club
//! assignment. Nothing is stored and nothing is thrown — denial is a
//! plain `false`.
//!
//! # Permission Model
//!
//! ```text
//! Effective access = Rank floor(how senior) ∩ Role rules(which role) ∩ Ownership(whose club)
//! ```
//!
//! | Layer | Operation | Decides |
//! |-------|-----------|---------|
//! | Rank floor | [`has_minimum_role`] | "at least this seniority" |
//! | Role rules | [`can_manage_venues`], [`can_update_schedule`], ... | role-specific capability sets |
//! | Ownership | [`can_manage_club`], [`can_create_events`], ... | faculty ↔ club assignment |
//!
//! # Hierarchy
//!
//! ```text
//! admin (3)      everything: student + faculty work, plus admin-only
//! faculty (2)    own-club management, plus all student work
//! office (2)     venues and schedules, plus all student work
//! student (1)    browse clubs, register for events, view schedules
//! (none)  (0)    nothing
//! ```
//!
//! Faculty and office share rank 2 deliberately, and the two grants
//! must not be conflated. Rank drives the *feature-token* layering in
//! [`available_features`] (office meets the faculty floor, so its set
//! includes the faculty tokens), but every club-scoped *predicate* is
//! role-specific: [`can_create_events`] and friends deny office
//! outright, regardless of rank or any club id.
//!
//! # Example
//!
//! ```
//! use infonest_auth::{can_create_events, can_manage_venues};
//! use infonest_types::{ClubId, Role, User, UserId};
//!
//! let advisor = User::new(UserId::new("u-1"), Role::Faculty, "Ada", "ada@campus.edu")
//!     .with_club(ClubId::new("acm"));
//!
//! assert!(can_create_events(Some(&advisor), Some(&ClubId::new("acm"))));
//! assert!(!can_create_events(Some(&advisor), Some(&ClubId::new("ieee"))));
//! assert!(!can_manage_venues(Some(&advisor)));
//! ```

pub mod dashboard;
pub mod engine;
pub mod feature;

pub use dashboard::{can_access_dashboard, default_dashboard};
pub use engine::{
    available_features, can_create_events, can_manage_club, can_manage_events,
    can_manage_venues, can_register_for_events, can_update_schedule,
    can_view_applications, can_view_clubs, can_view_schedule, has_minimum_role,
    permission_description,
};
pub use feature::Feature;
