//! Cross-cutting response middleware.
//!
//! Applied to every route, outermost first:
//! 1. cors.rs (headers + `OPTIONS` short-circuit with 204)
//! 2. cache.rs (no-cache headers)

pub mod cache;
pub mod cors;

pub use cache::no_cache;
pub use cors::cors_middleware;
