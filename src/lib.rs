//! GCS gateway library.
//!
//! An HTTP gateway in front of one onboard controller (OBC): status, tick and
//! capture reads are relayed verbatim, and detected-object messages are
//! decoded, forwarded, and echoed back with the controller's answer.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod message;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use message::DetectedObject;
pub use upstream::UpstreamClient;
