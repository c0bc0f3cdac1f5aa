//! Error types for the library layer.

use thiserror::Error;

/// Startup configuration failures. Never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing Magnet API key. Set MAGNET_API_KEY")]
    Missing,
    #[error("invalid MAGNET_API_KEY: must be a valid UUID (e.g. xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx)")]
    Invalid,
    #[error("API key pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}
