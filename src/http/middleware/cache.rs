//! Cache suppression headers.
//!
//! Every response is marked non-cacheable for browsers and intermediaries:
//! controller status and images change between calls.

use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";
pub const PRAGMA: &str = "no-cache";
pub const EXPIRES: &str = "0";
pub const SURROGATE_CONTROL: &str = "no-store";

/// Wrap every route of `router` with the no-cache response headers.
pub fn no_cache<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static(PRAGMA),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static(EXPIRES),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("surrogate-control"),
            HeaderValue::from_static(SURROGATE_CONTROL),
        ))
}
