//! Error types for polargrid.
//!
//! Construction-time violations (bad spacing, short sample arrays, unknown
//! configuration values) are reported through [`PolarGridError`]. Queries on a
//! built grid only fail for an empty mesh or when the caller opts in to
//! rejecting off-mesh points.

use thiserror::Error;

/// The main error type for polargrid operations.
#[derive(Error, Debug)]
pub enum PolarGridError {
    /// Non-positive (or non-finite) cell width/height
    #[error("Invalid dimension: {message}")]
    InvalidDimension { message: String },

    /// Sample array shorter than its declared shape, or a node/element id past the end
    #[error("Index out of range: index {index} but length is {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Query point not covered by any element (only under `OffMeshPolicy::Reject`)
    #[error("Point ({x}, {y}) lies outside the interpolation mesh")]
    OffMesh { x: f64, y: f64 },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors, including a second attempt to install the
    /// global tracing subscriber
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with PolarGridError
pub type Result<T> = std::result::Result<T, PolarGridError>;
