//! Mesh construction and interpolation.
//!
//! An [`InterpolatedGrid`] is built from a rectangular sample array; each
//! interior 2x2 block of samples becomes one [`InterpolationElement`].
//! Queries go through an [`ElementLocator`] to pick an element, which then
//! evaluates its bilinear interpolant.

pub mod common;
pub mod containment;
pub mod element;
pub mod grid;
pub mod nearest;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PolarGridError, Result};
use crate::geometry::CartesianPoint;

pub use element::InterpolationElement;
pub use grid::InterpolatedGrid;

/// Strategy for finding the element responsible for a query point
pub trait ElementLocator: fmt::Debug + Send + Sync {
    /// Index into `elements` of the element for `point`, or `None` if the
    /// point is off the mesh
    fn locate(&self, elements: &[InterpolationElement], point: &CartesianPoint) -> Option<usize>;

    /// Get the name of this locator
    fn name(&self) -> &str;
}

/// Get a locator by name for a grid with the given cell spacing
pub fn get_locator(
    name: &str,
    cell_width: f64,
    cell_height: f64,
) -> Result<Box<dyn ElementLocator>> {
    match name.to_lowercase().as_str() {
        "nearest_center" => Ok(Box::new(nearest::NearestCenterLocator::for_spacing(
            cell_width,
            cell_height,
        ))),
        "containment" => Ok(Box::new(containment::ContainmentLocator)),
        _ => Err(PolarGridError::InvalidParameter {
            param: "locator".to_string(),
            message: format!("Unknown locator: {}", name),
        }),
    }
}

/// What `find_value_at` does with a point no element claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffMeshPolicy {
    /// Evaluate on element 0, extrapolating. Off-mesh points are then
    /// indistinguishable from points in element 0.
    #[default]
    FirstElement,
    /// Fail with `PolarGridError::OffMesh`
    Reject,
}

impl FromStr for OffMeshPolicy {
    type Err = PolarGridError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_element" => Ok(OffMeshPolicy::FirstElement),
            "reject" => Ok(OffMeshPolicy::Reject),
            _ => Err(PolarGridError::InvalidParameter {
                param: "off_mesh".to_string(),
                message: format!("Unknown off-mesh policy: {}", s),
            }),
        }
    }
}

impl fmt::Display for OffMeshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffMeshPolicy::FirstElement => write!(f, "first_element"),
            OffMeshPolicy::Reject => write!(f, "reject"),
        }
    }
}
