//! Containment search.
//!
//! Returns the first element, in construction order, whose closed rectangle
//! contains the query point. Points on a shared edge go to the earlier
//! element.

use super::{ElementLocator, InterpolationElement};
use crate::geometry::CartesianPoint;

/// Point-in-rectangle locator
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentLocator;

impl ElementLocator for ContainmentLocator {
    fn locate(&self, elements: &[InterpolationElement], point: &CartesianPoint) -> Option<usize> {
        elements.iter().position(|element| element.contains(point))
    }

    fn name(&self) -> &str {
        "containment"
    }
}
