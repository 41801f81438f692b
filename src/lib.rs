//! Lookup Cache - bounded LRU cache with lazy TTL expiry
//!
//! Sits in front of a slower backing lookup. Provides the cache itself, a
//! cache-aside wrapper for backing lookups, and a small HTTP service around
//! one shared cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;

pub use api::AppState;
pub use cache::{CacheConfig, LookupCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use lookup::{BackingLookup, CachedLookup};
