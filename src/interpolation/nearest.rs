//! Nearest-center element search.
//!
//! A linear scan that picks the element whose center is closest to the
//! query point. This is not a containment test: the scan only accepts
//! squared distances below a bound seeded from the cell spacing, and
//! anything farther is reported as off-mesh.

use super::{ElementLocator, InterpolationElement};
use crate::geometry::CartesianPoint;

/// Nearest-center locator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCenterLocator {
    /// Initial running minimum for the squared distance
    seed: f64,
}

impl NearestCenterLocator {
    /// Create a locator with an explicit squared-distance seed
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// Seed with `cell_width + cell_height`.
    ///
    /// The bound is compared against a squared distance, so for unit cells
    /// any center within sqrt(2) of the point qualifies.
    pub fn for_spacing(cell_width: f64, cell_height: f64) -> Self {
        Self::new(cell_width + cell_height)
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }
}

impl ElementLocator for NearestCenterLocator {
    fn locate(&self, elements: &[InterpolationElement], point: &CartesianPoint) -> Option<usize> {
        let mut found = None;
        let mut min_distance = self.seed;

        for (i, element) in elements.iter().enumerate() {
            let distance = point.distance_squared(&element.center());
            // strict: on ties the earliest element wins
            if distance < min_distance {
                min_distance = distance;
                found = Some(i);
            }
        }

        found
    }

    fn name(&self) -> &str {
        "nearest_center"
    }
}
