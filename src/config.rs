//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::error::Result;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Cache values are validated separately by [`Config::cache_config`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of keys the cache holds at once
    pub cache_capacity: usize,
    /// Seconds after which a cached entry is treated as absent
    pub cache_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum resident keys (default: 1000)
    /// - `CACHE_TTL_SECONDS` - Entry lifetime in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
            cache_ttl_secs: env_or("CACHE_TTL_SECONDS", defaults.cache_ttl_secs),
            server_port: env_or("SERVER_PORT", defaults.server_port),
        }
    }

    /// Validates the cache settings.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` for a zero capacity or zero TTL.
    pub fn cache_config(&self) -> Result<CacheConfig> {
        CacheConfig::new(self.cache_capacity, Duration::from_secs(self.cache_ttl_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 1000,
            cache_ttl_secs: 300,
            server_port: 3000,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
