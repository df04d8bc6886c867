//! Upstream endpoint metadata, responses and error definitions.

use axum::http::{Method, StatusCode};
use thiserror::Error;

/// The onboard controller endpoints the gateway can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Status,
    Tick,
    Capture,
    Message,
}

impl Endpoint {
    /// HTTP method used against the controller.
    pub fn method(self) -> Method {
        match self {
            Endpoint::Status | Endpoint::Tick | Endpoint::Capture => Method::GET,
            Endpoint::Message => Method::POST,
        }
    }

    /// Path relative to the controller base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Status => "/status",
            Endpoint::Tick => "/tick",
            Endpoint::Capture => "/capture",
            Endpoint::Message => "/message",
        }
    }

    /// Content type of the outbound request body, if the endpoint takes one.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            Endpoint::Message => Some("application/json"),
            _ => None,
        }
    }

    /// Short name for logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Status => "status",
            Endpoint::Tick => "tick",
            Endpoint::Capture => "capture",
            Endpoint::Message => "message",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to the controller.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request could not be sent or no response arrived.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("read error: {0}")]
    Read(#[source] reqwest::Error),

    /// The outbound message could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Synthetic status reported in place of an upstream status.
    pub fn status(&self) -> StatusCode {
        match self {
            UpstreamError::Transport(_) => StatusCode::BAD_GATEWAY,
            UpstreamError::Read(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpstreamError::Encode(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short name for metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Read(_) => "read",
            UpstreamError::Encode(_) => "encode",
        }
    }
}

/// Raw body and status of one upstream call.
///
/// The body is never interpreted here; callers decide whether it is JSON,
/// text or image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub body: Vec<u8>,
    pub status: StatusCode,
}

impl UpstreamResponse {
    pub fn new(body: Vec<u8>, status: StatusCode) -> Self {
        Self { body, status }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

impl From<UpstreamError> for UpstreamResponse {
    fn from(err: UpstreamError) -> Self {
        Self {
            body: Vec::new(),
            status: err.status(),
        }
    }
}
