//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum router with the exposure endpoint
//! - Wire up middleware (timeout, request ID, tracing)
//! - Bind the server to a listener and serve with graceful shutdown

use crate::config::exposure::{ExposureSource, FileExposureSource};
use crate::config::schema::AppConfig;
use crate::http::handler;
use crate::http::payload::{JsonSerializer, Serializer};
use crate::routing::context::LocalePrefix;
use crate::routing::table::RouteTable;
use axum::http::HeaderName;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub exposure: Arc<dyn ExposureSource>,
    pub serializer: Arc<dyn Serializer>,
    pub config: Arc<AppConfig>,
    pub locale_prefix: Option<LocalePrefix>,
}

/// HTTP server for the routing exposure service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server with the file-backed exposure source and the JSON
    /// serializer.
    pub fn new(config: AppConfig) -> Self {
        let exposure = Arc::new(FileExposureSource::new(&config.exposure.config_path));
        Self::with_sources(config, exposure, Arc::new(JsonSerializer))
    }

    /// Create a server with injected capabilities. Used by tests to swap in
    /// in-memory sources.
    pub fn with_sources(
        config: AppConfig,
        exposure: Arc<dyn ExposureSource>,
        serializer: Arc<dyn Serializer>,
    ) -> Self {
        let state = AppState {
            table: Arc::new(RouteTable::from_config(&config.routes)),
            exposure,
            serializer,
            config: Arc::new(config.clone()),
            locale_prefix: LocalePrefix::from_config(&config.i18n),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let x_request_id = HeaderName::from_static("x-request-id");

        Router::new()
            .route("/routes", get(handler::routes_index))
            .route("/routes/{group}", get(handler::routes_for_group))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.config.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
