//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router around a single routable unit
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Ask the unit's matcher before executing, translate failures
//! - Bind the configured address and serve until the shutdown signal fires

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SessionMapConfig;
use crate::http::handler::Routable;
use crate::http::request::{request_id_header, MakeRequestUuid, RequestIdExt};
use crate::http::response::{error_response, UNKNOWN_COMMAND};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub unit: Arc<dyn Routable>,
}

/// HTTP server hosting one routable unit.
pub struct HttpServer {
    router: Router,
    config: SessionMapConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SessionMapConfig, unit: Arc<dyn Routable>) -> Self {
        let router = Self::build_router(&config, AppState { unit });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SessionMapConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::new(request_id_header()))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.limits.request_timeout_secs,
                    ))),
            )
    }

    /// The fully layered router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind a listener on the configured `listener.bind_address`.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(&self.config.listener.bind_address).await
    }

    /// Bind the configured address and serve until `shutdown` fires.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        self.run(listener, shutdown).await
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.limits.request_timeout_secs,
            max_body_size = self.config.limits.max_body_size,
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

    /// Get a reference to the config.
    pub fn config(&self) -> &SessionMapConfig {
        &self.config
    }
}

/// Ask the unit whether it owns the request, then let it execute.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    if !state.unit.matches(&request) {
        tracing::debug!(
            request_id = %request.request_id(),
            method = %request.method(),
            path = %request.uri().path(),
            "No handler owns request"
        );
        let message = format!(
            "Unable to find handler for ({}) {}",
            request.method(),
            request.uri().path()
        );
        return error_response(StatusCode::NOT_FOUND, UNKNOWN_COMMAND, &message);
    }

    match state.unit.execute(request).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
