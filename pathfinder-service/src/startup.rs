//! Application startup and lifecycle management.

use crate::config::PathfinderConfig;
use crate::handlers;
use crate::services::PathFinder;
use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Shared application state. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: PathfinderConfig,
    pub path_finder: PathFinder,
}

impl AppState {
    pub fn new(config: PathfinderConfig) -> Self {
        let path_finder = PathFinder::new(config.grid());
        Self {
            config,
            path_finder,
        }
    }
}

pub fn build_router(state: AppState) -> Result<Router, AppError> {
    let routes = Router::new()
        .route("/find-path", post(handlers::paths::find_path))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics));

    let router = with_middleware(routes, &state.config)?;
    Ok(router.with_state(state))
}

/// Wrap `routes` in the service's middleware stack: request timeout,
/// metrics, tracing, request id, security headers and CORS.
pub fn with_middleware<S>(routes: Router<S>, config: &PathfinderConfig) -> Result<Router<S>, AppError>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins()?)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(routes
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Validate configuration, build the router and bind the listener.
    ///
    /// Port 0 binds a random free port; use [`Application::port`] to find it.
    pub async fn build(config: PathfinderConfig) -> Result<Self, AppError> {
        config.validate()?;

        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            grid_size = config.grid.size,
            "Pathfinder service listening on {}:{}",
            config.common.host,
            port
        );

        let router = build_router(AppState::new(config))?;

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let config = PathfinderConfig {
            request_timeout_ms: 20,
            ..PathfinderConfig::default()
        };
        let routes = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                "done"
            }),
        );
        let app = with_middleware(routes, &config).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn fast_request_is_not_cut_off() {
        let config = PathfinderConfig {
            request_timeout_ms: 1_000,
            ..PathfinderConfig::default()
        };
        let app = build_router(AppState::new(config)).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/find-path")
                    .body(Body::from(r#"{"end": {"x": 2, "y": 0}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
