//! HTTP client for the onboard controller.
//!
//! # Responsibilities
//! - Issue exactly one HTTP call per operation against a fixed base URL
//! - Normalize failures into synthetic status codes
//! - Apply the configured connect/request timeouts (none by default)
//!
//! Every operation has the same three outcomes: transport failure (502),
//! body-read failure (500), or the upstream's own status with its raw body.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{Endpoint, UpstreamError, UpstreamResponse};

/// Client wrapper bound to one controller.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = Self {
            http: builder.build()?,
            base_url: config.base_url(),
        };

        tracing::info!(
            base_url = %client.base_url,
            connect_timeout_secs = ?config.connect_timeout_secs,
            request_timeout_secs = ?config.request_timeout_secs,
            "Upstream client initialized"
        );

        Ok(client)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /status`.
    pub async fn get_status(&self) -> UpstreamResponse {
        self.forward(Endpoint::Status, None).await
    }

    /// `GET /tick`.
    pub async fn get_tick(&self) -> UpstreamResponse {
        self.forward(Endpoint::Tick, None).await
    }

    /// `GET /capture`. The image payload is returned as opaque bytes.
    pub async fn get_capture(&self) -> UpstreamResponse {
        self.forward(Endpoint::Capture, None).await
    }

    /// `POST /message` with `message` serialized as JSON.
    ///
    /// A serialization failure yields 400 without touching the network.
    pub async fn post_message<T: Serialize + ?Sized>(&self, message: &T) -> UpstreamResponse {
        match serde_json::to_vec(message) {
            Ok(body) => self.forward(Endpoint::Message, Some(body)).await,
            Err(e) => {
                let err = UpstreamError::from(e);
                tracing::error!(error = %err, "Failed to encode message for upstream");
                metrics::record_upstream_failure(Endpoint::Message.as_str(), err.kind());
                err.into()
            }
        }
    }

    /// Perform one call to `endpoint`, mapping failures to synthetic statuses.
    pub async fn forward(&self, endpoint: Endpoint, body: Option<Vec<u8>>) -> UpstreamResponse {
        let start = Instant::now();
        match self.try_forward(endpoint, body).await {
            Ok(response) => {
                tracing::debug!(
                    endpoint = %endpoint,
                    status = response.status.as_u16(),
                    bytes = response.body.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream responded"
                );
                response
            }
            Err(err) => {
                tracing::error!(endpoint = %endpoint, error = %err, "Upstream request failed");
                metrics::record_upstream_failure(endpoint.as_str(), err.kind());
                err.into()
            }
        }
    }

    async fn try_forward(
        &self,
        endpoint: Endpoint,
        body: Option<Vec<u8>>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self.http.request(endpoint.method(), url);
        if let Some(content_type) = endpoint.content_type() {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(UpstreamError::Transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(UpstreamError::Read)?;

        Ok(UpstreamResponse::new(bytes.to_vec(), status))
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
