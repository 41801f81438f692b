//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, get_handler, health_handler, invalidate_handler, put_handler, stats_handler,
    AppState,
};
use crate::cache::Clock;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:key` - Retrieve a cached value
/// - `PUT /cache/:key` - Cache a value
/// - `DELETE /cache/:key` - Invalidate a key
/// - `DELETE /cache` - Clear the cache
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: Clock + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/cache/:key",
            get(get_handler::<C>)
                .put(put_handler::<C>)
                .delete(invalidate_handler::<C>),
        )
        .route("/cache", delete(clear_handler::<C>))
        .route("/stats", get(stats_handler::<C>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LookupCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = LookupCache::new(100, Duration::from_secs(300)).unwrap();
        create_router(AppState::new(cache))
    }

    async fn status_of(app: Router, method: &str, uri: &str, body: Body) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let status = status_of(create_test_app(), "GET", "/health", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let status = status_of(create_test_app(), "GET", "/stats", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_endpoint() {
        let body = Body::from(r#"{"value":"hello"}"#);
        let status = status_of(create_test_app(), "PUT", "/cache/test", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let status = status_of(create_test_app(), "GET", "/cache/nonexistent", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalidate_absent_key() {
        let status = status_of(create_test_app(), "DELETE", "/cache/absent", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_clear_endpoint() {
        let status = status_of(create_test_app(), "DELETE", "/cache", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }
}
