//! Point types and the polar to Cartesian transform.
//!
//! Query points arrive in polar form `(r, theta)` with `theta` in radians.
//! The mesh itself lives in Cartesian space, so every query is converted
//! with [`polar_to_cartesian`] before element lookup.

use serde::{Deserialize, Serialize};

/// A point in 2D Cartesian space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

/// A point in 2D polar space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Radius
    pub r: f64,
    /// Angle in radians, measured counter-clockwise from the +x axis
    pub theta: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`
    pub fn distance_squared(&self, other: &CartesianPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Convert to polar form. `theta` is in `(-pi, pi]`.
    pub fn to_polar(&self) -> PolarPoint {
        PolarPoint {
            r: self.x.hypot(self.y),
            theta: self.y.atan2(self.x),
        }
    }
}

impl PolarPoint {
    pub fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }
}

/// Convert a polar point `(r, theta)` to Cartesian `(r cos theta, r sin theta)`.
///
/// Non-finite input propagates to the output unchanged.
pub fn polar_to_cartesian(p: PolarPoint) -> CartesianPoint {
    let (sin, cos) = p.theta.sin_cos();
    CartesianPoint {
        x: p.r * cos,
        y: p.r * sin,
    }
}

impl From<PolarPoint> for CartesianPoint {
    fn from(p: PolarPoint) -> Self {
        polar_to_cartesian(p)
    }
}

impl From<CartesianPoint> for PolarPoint {
    fn from(p: CartesianPoint) -> Self {
        p.to_polar()
    }
}
