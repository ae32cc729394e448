//! Navigation state.
//!
//! [`Navigator`] owns the `(current page, params)` pair — the only
//! navigation state in the core. It applies exactly one invariant: a
//! page that requires parameters is never entered without them.
//! Authorization gating happens one layer up, in
//! [`AppShell`](crate::AppShell), before `navigate` is called.

use infonest_types::{NavParams, PageId};
use tracing::debug;

/// Holder of the current page and its parameters.
///
/// # Example
///
/// ```
/// use infonest_app::Navigator;
/// use infonest_types::{ClubId, NavParams, PageId};
///
/// let mut nav = Navigator::new();
/// assert_eq!(nav.current_page(), PageId::Home);
///
/// // Parameterless navigation
/// assert!(nav.navigate(PageId::Schedule, None));
///
/// // A detail view without params is refused (no-op)
/// assert!(!nav.navigate(PageId::ClubDetail, None));
/// assert_eq!(nav.current_page(), PageId::Schedule);
///
/// let params = NavParams::for_club(ClubId::new("acm"), "technical");
/// assert!(nav.navigate(PageId::ClubDetail, Some(params)));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    current: PageId,
    params: Option<NavParams>,
}

impl Navigator {
    /// Creates a navigator on the boot page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: PageId::Home,
            params: None,
        }
    }

    /// Returns the current page.
    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.current
    }

    /// Returns the current navigation parameters, if any.
    #[must_use]
    pub fn params(&self) -> Option<&NavParams> {
        self.params.as_ref()
    }

    /// Sets the current page and parameters.
    ///
    /// Returns `false` without changing state when `page` requires
    /// parameters and none were supplied; otherwise sets both fields
    /// unconditionally and returns `true`.
    pub fn navigate(&mut self, page: PageId, params: Option<NavParams>) -> bool {
        if page.requires_params() && params.is_none() {
            debug!(page = %page, "refusing navigation without required params");
            return false;
        }
        self.current = page;
        self.params = params;
        true
    }

    /// Returns to the boot page and clears parameters (logout path).
    pub fn reset(&mut self) {
        self.current = PageId::Home;
        self.params = None;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
