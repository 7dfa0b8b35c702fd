//! Configuration management

use serde::{Deserialize, Serialize};
use receipt_core::{Destinations, Error, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where the page's navigation actions lead
    pub destinations: Destinations,

    /// Directory served under /static
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destinations: Destinations::default(),
            static_dir: "server/static".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = if let Some(p) = path {
            Self::load_from_file(p)?
        } else {
            Self::load_from_env()
        };

        config.destinations.validate()?;
        Ok(config)
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let var = |key: &str, default: String| lookup(key).unwrap_or(default);

        Config {
            destinations: Destinations {
                listing: var("LISTING_URL", defaults.destinations.listing),
                dashboard: var("DASHBOARD_URL", defaults.destinations.dashboard),
                home: var("HOME_URL", defaults.destinations.home),
            },
            static_dir: var("STATIC_DIR", defaults.static_dir),
        }
    }
}
