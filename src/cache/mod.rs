//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and lazy TTL expiry.

mod clock;
mod config;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub(crate) use entry::CacheEntry;
pub use lru::{RecencyList, SlotId};
pub use stats::CacheStats;
pub use store::LookupCache;
