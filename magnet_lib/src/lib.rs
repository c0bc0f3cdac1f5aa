//! Library layer for the Magnet CLI: environment configuration and an
//! exit-on-error client for the command layer.
//!
//! Wraps the `magnet_api` crate, which never terminates the process.

pub mod client;
pub mod config;
pub mod error;

pub use magnet_api;
pub use magnet_api::types;
pub use magnet_api::{Error, ListQuery, Query, SearchQuery, DEFAULT_LIST_LIMIT};

pub use client::{exit_with, ErrorHook, MagnetClient};
pub use config::Config;
pub use error::ConfigError;
