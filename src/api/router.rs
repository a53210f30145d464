use axum::{http::HeaderName, middleware, routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use super::state::AppState;
use super::users;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User records
        .nest("/api", users::create_users_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware));

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    // Outermost last: the ID is set before tracing and logging see the request.
    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::user::{InMemoryUserRepository, UserService};

    fn test_router() -> Router {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        create_router(AppState::new(Arc::new(service)), None)
    }

    async fn get_status(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_probe_routes() {
        assert_eq!(get_status(test_router(), "/health").await, StatusCode::OK);
        assert_eq!(get_status(test_router(), "/live").await, StatusCode::OK);
        assert_eq!(get_status(test_router(), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_users_mounted_under_api() {
        assert_eq!(get_status(test_router(), "/api/users").await, StatusCode::OK);
        assert_eq!(
            get_status(test_router(), "/api/users/1").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_metrics_route_absent_when_disabled() {
        assert_eq!(
            get_status(test_router(), "/metrics").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(REQUEST_ID_HEADER, "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let response = test_router()
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
