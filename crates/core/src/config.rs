//! Runtime configuration for the keychain adapters.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIST_MATCH_LIMIT, LIST_MATCH_LIMIT_ENV};
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeychainConfig {
    /// Maximum number of entries a single list call asks the store for.
    pub list_match_limit: usize,
}

impl Default for KeychainConfig {
    fn default() -> Self {
        Self {
            list_match_limit: DEFAULT_LIST_MATCH_LIMIT,
        }
    }
}

impl KeychainConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults; present but malformed values
    /// are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LIST_MATCH_LIMIT_ENV) {
            config.list_match_limit = parse_match_limit(&raw)?;
        }

        Ok(config)
    }

    pub fn with_list_match_limit(mut self, limit: usize) -> Self {
        self.list_match_limit = limit;
        self
    }
}

fn parse_match_limit(raw: &str) -> Result<usize, ConfigError> {
    let trimmed = raw.trim();
    let limit: usize = trimmed.parse().map_err(|_| {
        ConfigError::invalid_value(LIST_MATCH_LIMIT_ENV, trimmed, "expected a positive integer")
    })?;

    if limit == 0 {
        return Err(ConfigError::invalid_value(
            LIST_MATCH_LIMIT_ENV,
            trimmed,
            "must be at least 1",
        ));
    }

    Ok(limit)
}
