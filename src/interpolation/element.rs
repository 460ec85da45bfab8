//! The interpolation element: one quadrilateral cell of the mesh.
//!
//! ```text
//!   3 ---------- 2        b
//!   |            |        ^
//!   |     c      |        |
//!   |            |        +---> a
//!   0 ---------- 1
//! ```
//!
//! Corners are stored bottom-left, bottom-right, top-right, top-left. The
//! order must match [`shape_weights`]; nothing cross-checks it.

use super::common::{shape_weights, weighted_sum, CORNERS, LOCAL_CORNERS};
use crate::error::{PolarGridError, Result};
use crate::geometry::CartesianPoint;

/// A bilinear (Q4) element spanning four adjacent samples
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationElement {
    center: CartesianPoint,
    width: f64,
    height: f64,
    corner_values: [f64; CORNERS],
    corner_ids: [usize; CORNERS],
}

impl InterpolationElement {
    /// Create an element centered at `center`.
    ///
    /// Fails with `InvalidDimension` unless both `width` and `height` are
    /// strictly positive. Corner ids default to `[0, 1, 2, 3]`; use
    /// [`with_corner_ids`](Self::with_corner_ids) to record the backing samples.
    pub fn new(
        center: CartesianPoint,
        width: f64,
        height: f64,
        corner_values: [f64; CORNERS],
    ) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;

        Ok(Self {
            center,
            width,
            height,
            corner_values,
            corner_ids: [0, 1, 2, 3],
        })
    }

    pub fn with_corner_ids(mut self, corner_ids: [usize; CORNERS]) -> Self {
        self.corner_ids = corner_ids;
        self
    }

    pub fn center(&self) -> CartesianPoint {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn corner_values(&self) -> &[f64; CORNERS] {
        &self.corner_values
    }

    pub fn corner_ids(&self) -> &[usize; CORNERS] {
        &self.corner_ids
    }

    /// Position of corner `k` (0..4) in Cartesian space
    pub fn corner(&self, k: usize) -> Result<CartesianPoint> {
        let (a, b) = LOCAL_CORNERS
            .get(k)
            .copied()
            .ok_or(PolarGridError::IndexOutOfRange { index: k, len: CORNERS })?;
        Ok(CartesianPoint {
            x: self.center.x + a * self.width / 2.0,
            y: self.center.y + b * self.height / 2.0,
        })
    }

    /// Whether `p` lies in the closed rectangle covered by this element
    pub fn contains(&self, p: &CartesianPoint) -> bool {
        let (a, b) = self.local_coordinates(p.x, p.y);
        a.abs() <= 1.0 && b.abs() <= 1.0
    }

    /// Normalized local coordinates `(a, b)`; both in `[-1, 1]` inside the cell
    pub fn local_coordinates(&self, x: f64, y: f64) -> (f64, f64) {
        let a = (x - self.center.x) / (self.width / 2.0);
        let b = (y - self.center.y) / (self.height / 2.0);
        (a, b)
    }

    /// Bilinear interpolation of the corner values at `(x, y)`.
    ///
    /// No range check: points outside the cell are extrapolated linearly.
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        let (a, b) = self.local_coordinates(x, y);
        weighted_sum(&shape_weights(a, b), &self.corner_values)
    }
}

fn check_extent(name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(PolarGridError::InvalidDimension {
            message: format!("element {} must be positive, got {}", name, value),
        });
    }
    Ok(())
}
