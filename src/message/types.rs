//! Object-detection message types.
//!
//! Encoded as protobuf-compatible JSON: lowerCamelCase field names on output,
//! proto field names accepted as aliases on input, default-valued fields
//! omitted, unknown fields ignored.

use serde::{Deserialize, Serialize};

use crate::message::json;

/// An object-detection event reported to the onboard controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectedObject {
    /// Class label of the detection (e.g., "cone").
    #[serde(deserialize_with = "json::string", skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Detector confidence in `[0, 1]`.
    #[serde(deserialize_with = "json::number", skip_serializing_if = "is_zero")]
    pub confidence: f64,

    /// Tracker identity, 0 when untracked.
    #[serde(
        alias = "track_id",
        deserialize_with = "json::number",
        skip_serializing_if = "is_zero_u32"
    )]
    pub track_id: u32,

    /// Location of the detection in the frame.
    #[serde(alias = "bounding_box", skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

/// Axis-aligned box in frame coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    #[serde(deserialize_with = "json::number", skip_serializing_if = "is_zero")]
    pub x: f64,
    #[serde(deserialize_with = "json::number", skip_serializing_if = "is_zero")]
    pub y: f64,
    #[serde(deserialize_with = "json::number", skip_serializing_if = "is_zero")]
    pub width: f64,
    #[serde(deserialize_with = "json::number", skip_serializing_if = "is_zero")]
    pub height: f64,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}
