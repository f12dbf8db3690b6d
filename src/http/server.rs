//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics, headers)
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::{metrics, tracing::make_request_span};
use crate::security::{headers::with_security_headers, InputLimits};

/// Fallback when the configured max-age cannot be rendered as a header.
const DEFAULT_CACHE_CONTROL: &str = "public, max-age=86400";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache_control: HeaderValue,
    pub limits: InputLimits,
}

impl AppState {
    pub fn from_config(config: &ServiceConfig) -> Self {
        let cache_control = HeaderValue::from_str(&config.cache.header_value())
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CACHE_CONTROL));
        Self {
            cache_control,
            limits: InputLimits::from_config(&config.security),
        }
    }
}

/// HTTP server for the conversion service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub(crate) fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/roman_to_int/{roman}", get(handlers::roman_to_int))
            .route("/int_to_roman/{value}", get(handlers::int_to_roman))
            .route_layer(middleware::from_fn(metrics::track_requests))
            .with_state(state);

        let router = if config.security.enable_headers {
            with_security_headers(router)
        } else {
            router
        };

        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
