//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both routes
//! - Wire up middleware (request id, tracing, limits, timeout, CORS,
//!   origin gate, rate limiter)
//! - Bind the server to a listener and serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::mail::{MailRelay, MailTransport};
use crate::security::{
    cors_layer, origin_gate_middleware, rate_limit_middleware, OriginGateState, RateLimiterState,
};

/// Application state injected into handlers.
///
/// Constructed once at startup and cloned per request; there are no
/// module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<MailRelay>,
}

/// HTTP server for the contact relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server from the configuration and a transport.
    ///
    /// The transport is injected so tests can substitute a fake without
    /// touching the network.
    pub fn new(config: RelayConfig, transport: Arc<dyn MailTransport>) -> Self {
        let state = AppState {
            relay: Arc::new(MailRelay::new(transport, &config.mail)),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Gate order on the way in: request id → trace → body limit →
    /// timeout → CORS (answers preflight) → origin gate → rate limiter
    /// (submission route only) → handler.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let origin_gate = Arc::new(OriginGateState::new(&config.cors));

        let mut submit = post(handlers::submit);
        if config.rate_limit.enabled {
            let limiter = Arc::new(RateLimiterState::new(&config.rate_limit));
            submit = submit.layer(middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ));
        }

        Router::new()
            .route("/", get(handlers::readiness))
            .route("/connect", submit)
            .with_state(state)
            .layer(middleware::from_fn_with_state(
                origin_gate,
                origin_gate_middleware,
            ))
            .layer(cors_layer(&config.cors))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
