//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with control routes and the catch-all dispatcher
//! - Wire up middleware (CORS, tracing, request ID, timeout, body limit)
//! - Bind plaintext and optional TLS listeners
//! - Own the mock registry for this server instance

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{validation::upstream_target, validate_config, ConfigError, ServerConfig};
use crate::http::control::{add_mock, clear_mocks, list_mocks};
use crate::http::dispatch::dispatch;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::{startup, RunningServer, Shutdown, StartupError};
use crate::mocks::MockRegistry;
use crate::routing::RoutingDecision;
use crate::upstream::UpstreamForwarder;

/// Fixed path of the control API, independent of the prefix.
pub const CONTROL_PATH: &str = "/mocks";

/// Trailing-slash form of [`CONTROL_PATH`], served by the same handlers.
const CONTROL_PATH_SLASH: &str = "/mocks/";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MockRegistry>,
    pub routing: Arc<RoutingDecision>,
    pub forwarder: Arc<UpstreamForwarder>,
    pub validation_status: StatusCode,
}

/// A mock server instance: one registry, one upstream, one router.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    registry: Arc<MockRegistry>,
}

impl HttpServer {
    /// Validate the configuration and build the server.
    ///
    /// Fails before anything is bound if the configuration is unusable,
    /// most notably when no upstream target is set.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Invalid)?;
        let target = upstream_target(&config).map_err(|v| ConfigError::Invalid(vec![v]))?;

        let registry = Arc::new(MockRegistry::new(config.prefix.clone()));
        let routing = Arc::new(RoutingDecision::new(config.prefix.clone(), registry.clone()));
        let forwarder = Arc::new(UpstreamForwarder::new(target, &config.timeouts));

        tracing::info!(
            target_origin = %forwarder.target(),
            prefix = %config.prefix,
            "Mock server configured"
        );

        let state = AppState {
            registry: registry.clone(),
            routing,
            forwarder,
            validation_status: StatusCode::from_u16(config.control.validation_status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            registry,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let control = post(add_mock)
            .get(list_mocks)
            .delete(clear_mocks)
            .fallback(dispatch)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size));

        Router::new()
            .route(CONTROL_PATH, control.clone())
            .route(CONTROL_PATH_SLASH, control)
            .fallback(dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID.clone()))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(request),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestId))
    }

    /// Bind the configured listeners and start serving.
    ///
    /// Returns once both listeners are bound; serving continues in the
    /// background until `shutdown` is triggered.
    pub async fn start(self, shutdown: &Shutdown) -> Result<RunningServer, StartupError> {
        startup::start(&self.config, self.router, shutdown).await
    }

    /// Serve plaintext HTTP on an already bound listener until shutdown.
    pub async fn run(self, listener: TcpListener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown.signalled())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// This instance's mock registry.
    pub fn registry(&self) -> Arc<MockRegistry> {
        self.registry.clone()
    }
}
