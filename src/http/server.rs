//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, no-cache, body limit, request ID, tracing)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::{GatewayConfig, SecurityConfig};
use crate::http::handlers;
use crate::http::middleware::{cors_middleware, no_cache};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let router = Self::build_router(&config.security, AppState { upstream });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(security: &SecurityConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api/v1/obc/status", get(handlers::get_status))
            .route("/api/v1/obc/tick", get(handlers::get_tick))
            .route("/api/v1/obc/capture", get(handlers::get_capture))
            .route("/api/v1/obc/message", post(handlers::post_message))
            .fallback(handlers::not_found)
            .with_state(state);

        no_cache(api)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(security.max_body_size))
            .layer(middleware::from_fn(cors_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// A handle to the router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url(),
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
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
