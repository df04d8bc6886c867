//! Messages exchanged with the onboard controller.

pub mod json;
pub mod types;

pub use types::{BoundingBox, DetectedObject};
