//! Core types for the InfoNest campus platform.
//!
//! This crate provides the foundational value types shared by every
//! layer of the InfoNest front-end core: roles, users, page identifiers
//! and the unified error-code interface.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Decision Layer                          │
//! │  infonest-auth  : Feature flags, permission predicates,    │
//! │                   dashboard resolver                       │
//! ├────────────────────────────────────────────────────────────┤
//! │                    Shell Layer                             │
//! │  infonest-app   : AuthService seam, SessionController,    │
//! │                   Navigator, AppShell                      │
//! ├────────────────────────────────────────────────────────────┤
//! │  infonest-types : Role, User, PageId, ErrorCode  ◄── HERE  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Closed sets are enums**: [`Role`] and [`PageId`] are tagged
//!   variants with exhaustive matches downstream, so adding a role or a
//!   page is a compile-time-visible change everywhere it matters.
//! - **Unauthenticated is `None`, not a variant**: there is no
//!   "anonymous" role. Callers pass `Option<&User>` and the absence is
//!   handled explicitly at every decision point.
//! - **No permission logic here**: these are identity and routing
//!   values only. Authorization lives in `infonest-auth`.

pub mod error;
pub mod id;
pub mod page;
pub mod role;
pub mod user;

pub use error::ErrorCode;
pub use id::{ClubId, UserId};
pub use page::{NavParams, PageId, PageParseError};
pub use role::{rank_of, Role, RoleParseError};
pub use user::User;
