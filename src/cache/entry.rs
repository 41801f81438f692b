//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

use crate::cache::lru::SlotId;

// == Cache Entry ==
/// A resident value, the instant it was last stored, and its recency slot.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Set on insertion and on every overwrite; reads leave it alone
    pub stored_at: Instant,
    /// Position of the key in the recency list
    pub(crate) slot: SlotId,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub(crate) fn new(value: V, stored_at: Instant, slot: SlotId) -> Self {
        Self {
            value,
            stored_at,
            slot,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    // == Is Expired ==
    /// Checks if the entry is older than `ttl`.
    ///
    /// An entry whose age equals `ttl` exactly is still fresh.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }

    // == Refresh ==
    /// Replaces the value and restarts the TTL clock.
    pub(crate) fn refresh(&mut self, value: V, now: Instant) {
        self.value = value;
        self.stored_at = now;
    }
}
