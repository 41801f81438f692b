//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and lazy
//! TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheConfig, CacheEntry, CacheStats, Clock, RecencyList, SystemClock};
use crate::error::Result;

// == Lookup Cache ==
/// Bounded cache with LRU eviction and lazy TTL expiry.
///
/// Every operation takes `&mut self` or `&self` and never blocks; share an
/// instance across tasks by wrapping it in a single lock.
///
/// Expired entries are only dropped when read. Until then they keep their
/// slot and can be displaced by LRU eviction like any other entry.
#[derive(Debug)]
pub struct LookupCache<K, V, C = SystemClock> {
    /// Key to value, timestamp and recency slot
    entries: HashMap<K, CacheEntry<V>>,
    /// LRU order of resident keys
    recency: RecencyList<K>,
    /// Performance statistics
    stats: CacheStats,
    config: CacheConfig,
    clock: C,
}

impl<K, V> LookupCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` keys for at most `ttl` each.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` if `capacity` is zero or `ttl` is zero.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Ok(Self::from_config(CacheConfig::new(capacity, ttl)?))
    }

    /// Creates a cache from an already validated config.
    pub fn from_config(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> LookupCache<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: HashMap::with_capacity(config.capacity()),
            recency: RecencyList::with_capacity(config.capacity()),
            stats: CacheStats::new(),
            config,
            clock,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit marks the key most recently used but does not restart its TTL.
    /// An expired entry is removed and reported as a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let ttl = self.config.ttl();

        let slot = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) if entry.is_expired(now, ttl) => None,
            Some(entry) => Some(entry.slot),
        };

        let Some(slot) = slot else {
            self.remove_entry(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            debug!(resident = self.entries.len(), "dropped expired entry on read");
            return None;
        };

        self.recency.move_to_back(slot);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Put ==
    /// Stores a value, stamping it with the current time.
    ///
    /// Overwriting a resident key refreshes its value, timestamp and recency
    /// without touching capacity. Inserting a new key into a full cache first
    /// evicts the least recently used key, whether or not it has expired.
    pub fn put(&mut self, key: K, value: V) {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.refresh(value, now);
            self.recency.move_to_back(entry.slot);
            return;
        }

        if self.entries.len() >= self.config.capacity() {
            if let Some(evicted) = self.recency.pop_front() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(
                    capacity = self.config.capacity(),
                    "evicted least recently used entry"
                );
            }
        }

        let slot = self.recency.push_back(key.clone());
        self.entries.insert(key, CacheEntry::new(value, now, slot));
    }

    // == Invalidate ==
    /// Removes a key regardless of its age. Absent keys are ignored.
    pub fn invalidate<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key);
    }

    // == Clear ==
    /// Removes every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn remove_entry<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(entry) = self.entries.remove(key) {
            self.recency.remove(entry.slot);
        }
    }
}

impl<K, V, C> LookupCache<K, V, C>
where
    K: Eq + Hash,
{
    // == Contains Key ==
    /// Whether `key` occupies a slot, expired or not.
    ///
    /// Has no effect on recency, expiry or statistics.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Keys By Recency ==
    /// Resident keys from least to most recently used.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &K> {
        self.recency.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    pub fn ttl(&self) -> Duration {
        self.config.ttl()
    }

    // == Length ==
    /// Returns the number of resident entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
