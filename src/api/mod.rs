//! API Module
//!
//! HTTP handlers and routing for the cache service REST API.
//!
//! # Endpoints
//! - `GET /cache/:key` - Retrieve a cached value
//! - `PUT /cache/:key` - Cache a value
//! - `DELETE /cache/:key` - Invalidate a key
//! - `DELETE /cache` - Clear the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
