//! Lookup Module
//!
//! Cache-aside access to a slower backing lookup.
//!
//! The cache itself knows nothing about where values come from. This module
//! holds both halves: it asks the cache first, falls back to the backing
//! lookup on a miss, and keeps the cache in step when records change.

mod cached;

pub use cached::{BackingLookup, CachedLookup};
