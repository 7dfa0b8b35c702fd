//! Core library for the payment receipt page
//!
//! This crate holds the view controller behind the payment success screen:
//! query-string parsing, the derived transaction summary, named navigation
//! destinations and the redirect check.

pub mod clock;
pub mod controller;
pub mod error;
pub mod query;
pub mod types;

// Re-exports
pub use clock::{format_display_date, Clock, FixedClock, SystemClock};
pub use controller::{is_missing_id, Navigator, PendingNavigation, ViewController};
pub use error::{Error, Result};
pub use query::{Location, TRANSACTION_ID_PARAM};
pub use types::{Destination, Destinations, TransactionSummary};
