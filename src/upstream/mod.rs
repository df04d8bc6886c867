//! Onboard controller (upstream) subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (one HTTP call per operation, no retries)
//!     → types.rs (Endpoint metadata, UpstreamError → synthetic status)
//!     → UpstreamResponse (raw bytes + status)
//! ```

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{Endpoint, UpstreamError, UpstreamResponse};
