//! View controller for the payment success page
//!
//! The controller derives display state from the current location and owns
//! the page's navigation side effects. Rendering is a pure derivation; the
//! redirect check runs afterwards in [`ViewController::run_effects`], and only
//! when the derived transaction id differs from the one last checked.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::clock::format_display_date;
use crate::query::Location;
use crate::types::{Destination, TransactionSummary};

/// Router abstraction the controller navigates through
pub trait Navigator {
    fn navigate(&mut self, to: Destination);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, to: Destination) {
        (**self).navigate(to)
    }
}

/// Navigator that records the destination for a single request
///
/// Navigation is one-way: once a destination is recorded, later calls are
/// ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    target: Option<Destination>,
}

impl PendingNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination recorded so far
    pub fn target(&self) -> Option<Destination> {
        self.target
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&mut self, to: Destination) {
        match self.target {
            None => self.target = Some(to),
            Some(existing) => {
                warn!(%existing, ignored = %to, "Navigation already pending, ignoring");
            }
        }
    }
}

/// A transaction id counts as missing when absent or empty.
///
/// Any non-empty string, including `"0"`, is a valid id.
pub fn is_missing_id(transaction_id: Option<&str>) -> bool {
    transaction_id.map_or(true, str::is_empty)
}

/// Controller behind the success page
pub struct ViewController<N: Navigator> {
    navigator: N,
    // Outer None: never mounted. Inner value: the id the last check saw.
    last_checked: Option<Option<String>>,
}

impl<N: Navigator> ViewController<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            last_checked: None,
        }
    }

    /// Derive the display state for one render
    pub fn render(&self, location: &Location, today: NaiveDate) -> TransactionSummary {
        TransactionSummary {
            transaction_id: location.transaction_id(),
            display_date: format_display_date(today),
        }
    }

    /// Post-render effect: redirect to the listing when the id is missing
    ///
    /// Runs on first mount and whenever the id changes. Returns `true` if this
    /// call navigated.
    pub fn run_effects(&mut self, summary: &TransactionSummary) -> bool {
        let current = summary.transaction_id.as_deref();
        if let Some(previous) = &self.last_checked {
            if previous.as_deref() == current {
                return false;
            }
        }
        self.last_checked = Some(summary.transaction_id.clone());

        if is_missing_id(current) {
            debug!(transaction_id = ?current, "No transaction id, redirecting to listing");
            self.navigator.navigate(Destination::Listing);
            true
        } else {
            false
        }
    }

    /// "Go to My Courses"
    pub fn continue_to_dashboard(&mut self) {
        self.navigator.navigate(Destination::Dashboard);
    }

    /// "Go To Home"
    pub fn browse_home(&mut self) {
        self.navigator.navigate(Destination::Home);
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}
