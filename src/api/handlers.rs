//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{Clock, LookupCache, SystemClock};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, ClearResponse, GetResponse, HealthResponse, KeyResponse, PutRequest,
    StatsResponse,
};

/// Cache type served over HTTP: string keys, arbitrary JSON values.
pub type ServiceCache<C = SystemClock> = LookupCache<String, Value, C>;

/// Application state shared across all handlers.
///
/// One lock guards every cache operation. Reads take the write half too,
/// since a hit updates recency and an expired read removes the entry.
pub struct AppState<C = SystemClock> {
    pub cache: Arc<RwLock<ServiceCache<C>>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C> AppState<C> {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ServiceCache<C>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

impl AppState<SystemClock> {
    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` if the cache settings are invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache_config = config.cache_config()?;
        Ok(Self::new(LookupCache::from_config(cache_config)))
    }
}

/// Handler for GET /cache/:key
pub async fn get_handler<C>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>>
where
    C: Clock + Send + Sync + 'static,
{
    let value = state.cache.write().await.get(&key).cloned();

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for PUT /cache/:key
pub async fn put_handler<C>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
    Json(req): Json<PutRequest>,
) -> Result<Json<KeyResponse>>
where
    C: Clock + Send + Sync + 'static,
{
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.write().await.put(key.clone(), req.value);

    Ok(Json(KeyResponse::stored(key)))
}

/// Handler for DELETE /cache/:key
///
/// Succeeds whether or not the key was resident.
pub async fn invalidate_handler<C>(
    State(state): State<AppState<C>>,
    Path(key): Path<String>,
) -> Json<KeyResponse>
where
    C: Clock + Send + Sync + 'static,
{
    state.cache.write().await.invalidate(&key);

    Json(KeyResponse::invalidated(key))
}

/// Handler for DELETE /cache
pub async fn clear_handler<C>(State(state): State<AppState<C>>) -> Json<ClearResponse>
where
    C: Clock + Send + Sync + 'static,
{
    let cleared = {
        let mut cache = state.cache.write().await;
        let resident = cache.len();
        cache.clear();
        resident
    };
    info!("Cache cleared: {} entries dropped", cleared);

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler<C>(State(state): State<AppState<C>>) -> Json<StatsResponse>
where
    C: Clock + Send + Sync + 'static,
{
    let cache = state.cache.read().await;

    Json(StatsResponse::new(&cache.stats(), cache.capacity()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
