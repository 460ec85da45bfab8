//! Common utilities for interpolation.
//!
//! Shape functions for the four-node (Q4) bilinear element on the local
//! square `[-1, 1] x [-1, 1]`.

/// Number of corner nodes on an element
pub const CORNERS: usize = 4;

/// Local coordinates of the four corners, in corner order
/// (bottom-left, bottom-right, top-right, top-left).
pub const LOCAL_CORNERS: [(f64, f64); CORNERS] =
    [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Bilinear shape-function weights at local coordinates `(a, b)`.
///
/// `a` and `b` are not clamped; outside `[-1, 1]` the weights extrapolate
/// linearly (and can go negative) but still sum to one.
pub fn shape_weights(a: f64, b: f64) -> [f64; CORNERS] {
    [
        0.25 * (1.0 - a) * (1.0 - b),
        0.25 * (1.0 + a) * (1.0 - b),
        0.25 * (1.0 + a) * (1.0 + b),
        0.25 * (1.0 - a) * (1.0 + b),
    ]
}

/// Blend corner values with weights from [`shape_weights`]
pub fn weighted_sum(weights: &[f64; CORNERS], values: &[f64; CORNERS]) -> f64 {
    weights
        .iter()
        .zip(values.iter())
        .map(|(w, v)| w * v)
        .sum()
}
