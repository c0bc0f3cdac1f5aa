//! Credential and endpoint resolution from the environment.

use regex::Regex;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "MAGNET_API_KEY";
pub const API_URL_VAR: &str = "MAGNET_API_URL";
pub const DEFAULT_BASE_URL: &str = "https://www.magnet.run";

/// Canonical UUID: version nibble 1-5, variant nibble 8, 9, a or b.
const API_KEY_PATTERN: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Reads `MAGNET_API_KEY` and `MAGNET_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: resolve_api_key()?,
            base_url: resolve_base_url(),
        })
    }

    /// Same as [`Config::from_env`], but prints the error and exits with code 1.
    pub fn from_env_or_exit() -> Self {
        Self::from_env().unwrap_or_else(|e| crate::exit_with(&e))
    }

    /// Builds a config from raw values, as if read from the environment.
    pub fn from_values(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: validate_api_key(api_key.unwrap_or_default())?,
            base_url: normalize_base_url(base_url),
        })
    }
}

pub fn resolve_api_key() -> Result<String, ConfigError> {
    let raw = std::env::var(API_KEY_VAR).unwrap_or_default();
    validate_api_key(&raw)
}

pub fn resolve_base_url() -> String {
    normalize_base_url(std::env::var(API_URL_VAR).ok().as_deref())
}

/// Trims `raw` and checks it is a canonical UUID.
pub fn validate_api_key(raw: &str) -> Result<String, ConfigError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::Missing);
    }
    let re = Regex::new(API_KEY_PATTERN)?;
    if !re.is_match(key) {
        tracing::debug!(len = key.len(), "API key rejected");
        return Err(ConfigError::Invalid);
    }
    Ok(key.to_string())
}

/// Trims and strips a trailing slash. Unset or blank falls back to the default.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let url = raw
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    url.strip_suffix('/').unwrap_or(url).to_string()
}
