//! Cache Configuration Module
//!
//! Immutable capacity and TTL settings, validated once at construction.

use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache Config ==
/// Capacity and lifetime of a cache instance.
///
/// Only constructible through [`CacheConfig::new`], so a value of this type is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    capacity: usize,
    ttl: Duration,
}

impl CacheConfig {
    // == Constructor ==
    /// Validates and builds a config.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` if `capacity` is zero or `ttl` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity < 1 {
            return Err(CacheError::Configuration(
                "capacity must be at least 1".to_string(),
            ));
        }
        if ttl.is_zero() {
            return Err(CacheError::Configuration(
                "ttl must be greater than zero".to_string(),
            ));
        }

        Ok(Self { capacity, ttl })
    }

    /// Maximum number of resident keys.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Age after which an entry is treated as absent.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
