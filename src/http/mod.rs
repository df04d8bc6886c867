//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span)
//!     → middleware/ (CORS + OPTIONS short-circuit, no-cache headers)
//!     → handlers.rs (decode, one upstream call)
//!     → response.rs (relay, error body, message envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{ErrorBody, RequestEnvelope};
pub use server::{AppState, HttpServer};
