//! Cached Lookup
//!
//! Wraps a backing lookup with one shared [`LookupCache`].

use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheConfig, CacheStats, Clock, LookupCache, SystemClock};
use crate::error::Result;

// == Backing Lookup ==
/// The slower source of truth a [`CachedLookup`] shields.
///
/// Typically a repository or a remote service call keyed by an identifier.
#[async_trait]
pub trait BackingLookup: Send + Sync {
    type Key: Eq + Hash + Clone + Send + Sync;
    type Value: Clone + Send + Sync;

    /// Fetches the canonical value for `key`.
    ///
    /// Returns `Ok(None)` when no record exists. Failures should be reported
    /// as `CacheError::Lookup`.
    async fn fetch(&self, key: &Self::Key) -> Result<Option<Self::Value>>;
}

// == Cached Lookup ==
/// Cache-aside front for a [`BackingLookup`].
///
/// All cache operations go through one mutex, which is never held while the
/// backing lookup runs. Every write bumps a generation counter kept under the
/// same mutex; a miss only caches what it fetched if the generation is
/// unchanged, so a fetch that overlaps a write cannot resurrect old data.
pub struct CachedLookup<L, C = SystemClock>
where
    L: BackingLookup,
{
    backing: L,
    state: Mutex<Guarded<L::Key, L::Value, C>>,
}

struct Guarded<K, V, C> {
    cache: LookupCache<K, V, C>,
    generation: u64,
}

impl<K, V, C> Guarded<K, V, C> {
    fn bump(&mut self) -> &mut LookupCache<K, V, C> {
        self.generation = self.generation.wrapping_add(1);
        &mut self.cache
    }
}

impl<L> CachedLookup<L, SystemClock>
where
    L: BackingLookup,
{
    /// Creates a cached lookup with a fresh cache built from `config`.
    pub fn new(backing: L, config: CacheConfig) -> Self {
        Self::with_cache(backing, LookupCache::from_config(config))
    }
}

impl<L, C> CachedLookup<L, C>
where
    L: BackingLookup,
    C: Clock + Send,
{
    /// Creates a cached lookup around an existing cache instance.
    pub fn with_cache(backing: L, cache: LookupCache<L::Key, L::Value, C>) -> Self {
        Self {
            backing,
            state: Mutex::new(Guarded {
                cache,
                generation: 0,
            }),
        }
    }

    // == Get ==
    /// Returns the value for `key`, consulting the backing lookup only on a
    /// cache miss.
    ///
    /// Found values are cached; absent records are not. A failed fetch leaves
    /// the cache untouched, and so does a fetch that raced with a write.
    pub async fn get(&self, key: &L::Key) -> Result<Option<L::Value>> {
        let generation = {
            let mut state = self.state.lock().await;
            if let Some(value) = state.cache.get(key).cloned() {
                debug!("lookup served from cache");
                return Ok(Some(value));
            }
            state.generation
        };

        debug!("cache miss, querying backing lookup");
        let fetched = self.backing.fetch(key).await.inspect_err(|err| {
            warn!(error = %err, "backing lookup failed");
        })?;

        if let Some(value) = &fetched {
            let mut state = self.state.lock().await;
            if state.generation == generation {
                state.cache.put(key.clone(), value.clone());
            } else {
                debug!("cache written during fetch, result not cached");
            }
        }

        Ok(fetched)
    }

    // == Store ==
    /// Caches `value` after the canonical record was written.
    pub async fn store(&self, key: L::Key, value: L::Value) {
        self.state.lock().await.bump().put(key, value);
    }

    // == Invalidate ==
    /// Drops `key` after the canonical record changed or was deleted.
    pub async fn invalidate(&self, key: &L::Key) {
        self.state.lock().await.bump().invalidate(key);
    }

    // == Rename ==
    /// Moves a record to a new key: the old key is dropped and the new key
    /// cached, under one lock acquisition.
    pub async fn rename(&self, old_key: &L::Key, new_key: L::Key, value: L::Value) {
        let mut state = self.state.lock().await;
        let cache = state.bump();
        cache.invalidate(old_key);
        cache.put(new_key, value);
    }

    // == Clear ==
    pub async fn clear(&self) {
        self.state.lock().await.bump().clear();
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.state.lock().await.cache.stats()
    }

    /// The wrapped backing lookup.
    pub fn backing(&self) -> &L {
        &self.backing
    }
}
