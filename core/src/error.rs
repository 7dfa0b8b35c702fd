//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid destination for {name}: {url}")]
    InvalidDestination { name: &'static str, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
