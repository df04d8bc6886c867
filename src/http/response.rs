//! Response bodies produced by the gateway.
//!
//! # Responsibilities
//! - Minimal JSON error body (`{"error": ...}`) for every failure
//! - The message-post envelope relaying request, upstream status and body
//!
//! # Design Decisions
//! - Upstream bodies that parse as JSON are nested as structures; anything
//!   else is embedded as a JSON string
//! - Envelope encoding failures fail closed with 500

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::message::DetectedObject;
use crate::upstream::UpstreamResponse;

/// Message returned when the envelope itself cannot be encoded.
pub const ENCODE_FAILURE_MESSAGE: &str = "Failed to encode response.";

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Reply to `POST /api/v1/obc/message`.
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    /// The decoded inbound message, re-encoded.
    pub request: &'a DetectedObject,
    /// Status the controller answered with (or the synthetic one).
    pub upstream_status: u16,
    /// Controller body as JSON when it parses, else as a string.
    pub upstream_body: Value,
}

impl<'a> RequestEnvelope<'a> {
    pub fn new(request: &'a DetectedObject, upstream: &UpstreamResponse) -> Self {
        Self {
            request,
            upstream_status: upstream.status.as_u16(),
            upstream_body: body_as_json(&upstream.body),
        }
    }
}

impl IntoResponse for RequestEnvelope<'_> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.upstream_status).unwrap_or(StatusCode::BAD_GATEWAY);
        match serde_json::to_vec(&self) {
            Ok(bytes) => {
                (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode message envelope");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, ENCODE_FAILURE_MESSAGE)
            }
        }
    }
}

/// Interpret an upstream body as JSON, falling back to a string.
pub fn body_as_json(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
