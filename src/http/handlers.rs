//! Route handlers for `/api/v1/obc/*`.
//!
//! Each handler performs exactly one upstream call. The three read-only
//! routes share [`relay`], parameterized by a [`RelayRoute`].

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::response::{error_response, RequestEnvelope};
use crate::http::server::AppState;
use crate::message::DetectedObject;
use crate::observability::metrics;
use crate::upstream::Endpoint;

/// Static description of a read-only pass-through route.
#[derive(Debug, Clone, Copy)]
pub struct RelayRoute {
    pub endpoint: Endpoint,
    /// Content type of a successful relay.
    pub content_type: &'static str,
    /// Error message sent when the upstream answers anything but 200.
    pub error_message: &'static str,
}

pub const STATUS_ROUTE: RelayRoute = RelayRoute {
    endpoint: Endpoint::Status,
    content_type: "application/json",
    error_message: "Failed to get status from OBC.",
};

pub const TICK_ROUTE: RelayRoute = RelayRoute {
    endpoint: Endpoint::Tick,
    content_type: "text/plain; charset=utf-8",
    error_message: "Failed to get tick from OBC.",
};

// Capture payloads are images, but the API has always served them as text.
pub const CAPTURE_ROUTE: RelayRoute = RelayRoute {
    endpoint: Endpoint::Capture,
    content_type: "text/plain; charset=utf-8",
    error_message: "Failed to get image from OBC.",
};

/// Forward to the route's endpoint and relay the body verbatim on 200.
pub async fn relay(state: &AppState, route: &RelayRoute) -> Response {
    let start = Instant::now();
    let upstream = state.upstream.forward(route.endpoint, None).await;

    let response = if upstream.is_ok() {
        ([(header::CONTENT_TYPE, route.content_type)], upstream.body).into_response()
    } else {
        tracing::warn!(
            endpoint = %route.endpoint,
            status = upstream.status.as_u16(),
            "Upstream returned an error"
        );
        error_response(upstream.status, route.error_message)
    };

    metrics::record_request(route.endpoint.as_str(), response.status().as_u16(), start);
    response
}

/// `GET /api/v1/obc/status`
pub async fn get_status(State(state): State<AppState>) -> Response {
    relay(&state, &STATUS_ROUTE).await
}

/// `GET /api/v1/obc/tick`
pub async fn get_tick(State(state): State<AppState>) -> Response {
    relay(&state, &TICK_ROUTE).await
}

/// `GET /api/v1/obc/capture`
pub async fn get_capture(State(state): State<AppState>) -> Response {
    relay(&state, &CAPTURE_ROUTE).await
}

/// `POST /api/v1/obc/message`
///
/// Decodes a `DetectedObject` (unknown fields dropped), forwards it, and
/// answers with the request/upstream envelope under the upstream's status.
pub async fn post_message(State(state): State<AppState>, body: Bytes) -> Response {
    let start = Instant::now();

    let response = match serde_json::from_slice::<DetectedObject>(&body) {
        Ok(message) => {
            tracing::debug!(label = %message.label, "Forwarding detected object");
            let upstream = state.upstream.post_message(&message).await;
            RequestEnvelope::new(&message, &upstream).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting undecodable message");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    };

    metrics::record_request(Endpoint::Message.as_str(), response.status().as_u16(), start);
    response
}

/// Fallback for unknown paths.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found.")
}
