//! Session and navigation shell for InfoNest.
//!
//! This crate holds the stateful half of the core: the active-user
//! slot, the current-page slot, and the glue that re-evaluates
//! navigation whenever the session changes. It consumes the pure
//! decision layer (`infonest-auth`) and exposes the
//! [`AuthService`] seam the real transport implements.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Render layer (external)                                 │
//! │  consumes (current_page, params, user);                  │
//! │  re-enters via handle_navigate / handle_login / logout   │
//! └───────────────▲──────────────────────────────────────────┘
//!                 │
//! ┌───────────────┴──────────────────────────────────────────┐
//! │  AppShell                                                │
//! │   ├── SessionController  — owns Option<User>             │
//! │   │       └── Arc<dyn AuthService>  (external transport) │
//! │   └── Navigator          — owns (PageId, NavParams)      │
//! │                                                          │
//! │  gating: infonest-auth::can_access_dashboard (advisory)  │
//! │  redirect: infonest-auth::default_dashboard (post-auth)  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Single-threaded model
//!
//! The shell is built for an event-driven UI loop: one in-flight
//! session operation at a time, enforced by `&mut self` on every
//! mutating method. Nothing here spawns tasks or needs locks.

pub mod auth_service;
pub mod error;
pub mod navigator;
pub mod session;
pub mod shell;

pub use auth_service::{AuthError, AuthService, Credentials, SignupRequest};
pub use error::AppError;
pub use navigator::Navigator;
pub use session::SessionController;
pub use shell::AppShell;
