//! Error types for the lookup cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache, the cached lookup and the HTTP service.
///
/// The cache operations themselves never fail; only construction does.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid capacity or TTL passed at construction
    #[error("Invalid cache configuration: {0}")]
    Configuration(String),

    /// Key not resident (or expired) in the cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The backing lookup behind the cache failed
    #[error("Lookup failed: {0}")]
    Lookup(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Lookup(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CacheError::Configuration("capacity".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CacheError::NotFound("k".into()), StatusCode::NOT_FOUND),
            (CacheError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (CacheError::Lookup("down".into()), StatusCode::BAD_GATEWAY),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_messages() {
        let err = CacheError::Configuration("capacity must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid cache configuration: capacity must be at least 1"
        );
        assert_eq!(CacheError::NotFound("abc".into()).to_string(), "Key not found: abc");
    }
}
