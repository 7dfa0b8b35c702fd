//! Shared types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Display state derived for one render of the success page
///
/// Nothing here is persisted. Both fields are recomputed from the current
/// location and clock every time the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// First `transactionId` value from the query string
    pub transaction_id: Option<String>,
    /// Today's date as "Month Day, Year"
    pub display_date: String,
}

impl TransactionSummary {
    /// Transaction id for display, empty string if absent
    pub fn transaction_id_display(&self) -> &str {
        self.transaction_id.as_deref().unwrap_or_default()
    }
}

/// Named navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Course listing, used when no transaction id is present
    Listing,
    /// Learner dashboard ("Go to My Courses")
    Dashboard,
    /// Home/catalog ("Go To Home")
    Home,
}

impl Destination {
    pub fn name(self) -> &'static str {
        match self {
            Destination::Listing => "listing",
            Destination::Dashboard => "dashboard",
            Destination::Home => "home",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// URLs for each named destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destinations {
    pub listing: String,
    pub dashboard: String,
    pub home: String,
}

impl Default for Destinations {
    fn default() -> Self {
        Self {
            listing: "/courses".to_string(),
            dashboard: "/dashboard".to_string(),
            home: "/".to_string(),
        }
    }
}

impl Destinations {
    /// Resolve a named destination to its URL
    pub fn url_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Listing => &self.listing,
            Destination::Dashboard => &self.dashboard,
            Destination::Home => &self.home,
        }
    }

    /// Check that every destination is an absolute path or an http(s) URL
    pub fn validate(&self) -> Result<()> {
        for destination in [Destination::Listing, Destination::Dashboard, Destination::Home] {
            let url = self.url_for(destination);
            if !is_valid_target(url) {
                return Err(Error::InvalidDestination {
                    name: destination.name(),
                    url: url.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_valid_target(url: &str) -> bool {
    // Must be usable as a Location header value
    if !url.bytes().all(|b| b.is_ascii_graphic()) {
        return false;
    }

    // "//host" is protocol-relative and would leave the site
    (url.starts_with('/') && !url.starts_with("//"))
        || url.starts_with("http://")
        || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destinations() {
        let d = Destinations::default();
        assert_eq!(d.url_for(Destination::Listing), "/courses");
        assert_eq!(d.url_for(Destination::Dashboard), "/dashboard");
        assert_eq!(d.url_for(Destination::Home), "/");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_destination_validation() {
        let absolute = Destinations {
            home: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert!(absolute.validate().is_ok());

        let relative = Destinations {
            dashboard: "dashboard".to_string(),
            ..Default::default()
        };
        match relative.validate() {
            Err(Error::InvalidDestination { name, url }) => {
                assert_eq!(name, "dashboard");
                assert_eq!(url, "dashboard");
            }
            other => panic!("expected InvalidDestination, got {:?}", other),
        }

        let protocol_relative = Destinations {
            listing: "//evil.example".to_string(),
            ..Default::default()
        };
        assert!(protocol_relative.validate().is_err());

        let empty = Destinations {
            home: String::new(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let with_space = Destinations {
            home: "/my home".to_string(),
            ..Default::default()
        };
        assert!(with_space.validate().is_err());
    }

    #[test]
    fn test_transaction_id_display() {
        let summary = TransactionSummary {
            transaction_id: None,
            display_date: "March 7, 2025".to_string(),
        };
        assert_eq!(summary.transaction_id_display(), "");
    }
}
