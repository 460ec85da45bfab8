//! The interpolated grid: a mesh of bilinear elements over a sample array.
//!
//! ```text
//!    S8 ----- S9 ----- S10 ---- S11
//!     |   E3   |   E4   |   E5   |
//!    S4 ----- S5 ----- S6 ----- S7        y
//!     |   E0   |   E1   |   E2   |        ^
//!    S0 ----- S1 ----- S2 ----- S3        +--> x
//! ```
//!
//! Every interior 2x2 block of samples becomes one element, appended in
//! row-major `(row, col)` order. That order is the element index returned by
//! [`InterpolatedGrid::find_element_id`]. Boundary elements (half cells along
//! the outer edge of the sample array) are not built.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace};

use super::nearest::NearestCenterLocator;
use super::{get_locator, ElementLocator, InterpolationElement, OffMeshPolicy};
use crate::config::SearchConfig;
use crate::error::{PolarGridError, Result};
use crate::geometry::{polar_to_cartesian, CartesianPoint, PolarPoint};
use crate::logging::{
    log_error, log_grid_build_stats, log_operation_end, log_operation_start, log_timed_operation,
};
use crate::samples::{check_spacing, required_len, SampleGrid};

/// A read-only mesh of interpolation elements
#[derive(Debug, Clone)]
pub struct InterpolatedGrid {
    cell_width: f64,
    cell_height: f64,
    n_samples_x: usize,
    n_samples_y: usize,
    elements: Vec<InterpolationElement>,
    locator: Arc<dyn ElementLocator>,
    off_mesh: OffMeshPolicy,
}

impl InterpolatedGrid {
    /// Build the mesh over a row-major sample array.
    ///
    /// Produces `(n_samples_x - 1) * (n_samples_y - 1)` elements, or none if
    /// either dimension is below 2. Corner values are copied, so later
    /// changes to `samples` do not affect the grid.
    ///
    /// Fails with `IndexOutOfRange` if `samples` holds fewer than
    /// `n_samples_x * n_samples_y` values, and with `InvalidDimension` for
    /// non-positive spacing.
    pub fn build(
        samples: &[f64],
        n_samples_x: usize,
        n_samples_y: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self> {
        let start = Instant::now();
        log_operation_start(
            "grid_build",
            Some(&format!("{}x{} samples", n_samples_x, n_samples_y)),
        );

        let result =
            Self::build_elements(samples, n_samples_x, n_samples_y, cell_width, cell_height);

        match result {
            Ok(elements) => {
                log_grid_build_stats(
                    n_samples_x,
                    n_samples_y,
                    cell_width,
                    cell_height,
                    elements.len(),
                );
                log_operation_end("grid_build", start, true);

                Ok(Self {
                    cell_width,
                    cell_height,
                    n_samples_x,
                    n_samples_y,
                    elements,
                    locator: Arc::new(NearestCenterLocator::for_spacing(cell_width, cell_height)),
                    off_mesh: OffMeshPolicy::default(),
                })
            }
            Err(e) => {
                log_error(&e, "grid_build");
                log_operation_end("grid_build", start, false);
                Err(e)
            }
        }
    }

    /// Build the mesh over a [`SampleGrid`]
    pub fn from_sample_grid(samples: &SampleGrid) -> Result<Self> {
        Self::build(
            samples.values(),
            samples.n_x(),
            samples.n_y(),
            samples.cell_width(),
            samples.cell_height(),
        )
    }

    fn build_elements(
        samples: &[f64],
        n_x: usize,
        n_y: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Vec<InterpolationElement>> {
        check_spacing(cell_width, cell_height)?;

        let required = required_len(n_x, n_y)?;
        if samples.len() < required {
            return Err(PolarGridError::IndexOutOfRange {
                index: required - 1,
                len: samples.len(),
            });
        }

        let n_cols = n_x.saturating_sub(1);
        let n_rows = n_y.saturating_sub(1);
        let mut elements = Vec::with_capacity(n_cols * n_rows);

        for row in 0..n_rows {
            for col in 0..n_cols {
                let i = row * n_x + col;
                // bottom-left, bottom-right, top-right, top-left
                let ids = [i, i + 1, i + 1 + n_x, i + n_x];
                let values = ids.map(|id| samples[id]);
                let center = CartesianPoint {
                    x: (col + 1) as f64 * cell_width,
                    y: (row + 1) as f64 * cell_height,
                };

                let element = InterpolationElement::new(center, cell_width, cell_height, values)?
                    .with_corner_ids(ids);
                elements.push(element);
            }
        }

        Ok(elements)
    }

    /// Replace the search strategy
    pub fn with_locator(mut self, locator: Arc<dyn ElementLocator>) -> Self {
        self.locator = locator;
        self
    }

    /// Choose what `find_value_at` does with off-mesh points
    pub fn with_off_mesh_policy(mut self, policy: OffMeshPolicy) -> Self {
        self.off_mesh = policy;
        self
    }

    /// Apply a locator name and off-mesh policy from configuration
    pub fn with_search_config(self, config: &SearchConfig) -> Result<Self> {
        let locator: Arc<dyn ElementLocator> =
            get_locator(&config.locator, self.cell_width, self.cell_height)?.into();
        Ok(self
            .with_locator(locator)
            .with_off_mesh_policy(config.off_mesh))
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn n_samples_x(&self) -> usize {
        self.n_samples_x
    }

    pub fn n_samples_y(&self) -> usize {
        self.n_samples_y
    }

    pub fn elements(&self) -> &[InterpolationElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn locator_name(&self) -> &str {
        self.locator.name()
    }

    pub fn off_mesh_policy(&self) -> OffMeshPolicy {
        self.off_mesh
    }

    /// Get an element with error handling
    pub fn element(&self, id: usize) -> Result<&InterpolationElement> {
        self.elements
            .get(id)
            .ok_or(PolarGridError::IndexOutOfRange {
                index: id,
                len: self.elements.len(),
            })
    }

    /// Index of the element responsible for `p`, or `None` when off the mesh
    pub fn locate(&self, p: &CartesianPoint) -> Option<usize> {
        self.locator.locate(&self.elements, p)
    }

    /// Index of the element responsible for `p`.
    ///
    /// Off-mesh points return `0`, the same as a point in the first element.
    /// Use [`locate`](Self::locate) to tell the two apart.
    pub fn find_element_id(&self, p: &CartesianPoint) -> usize {
        self.locate(p).unwrap_or_else(|| {
            debug!(x = p.x, y = p.y, "Point is off the mesh, falling back to element 0");
            0
        })
    }

    /// Interpolated value at `p`.
    ///
    /// Under `OffMeshPolicy::FirstElement` an off-mesh point is extrapolated
    /// from element 0; under `Reject` it fails with `OffMesh`. An empty grid
    /// fails with `IndexOutOfRange`.
    pub fn find_value_at(&self, p: &CartesianPoint) -> Result<f64> {
        let id = match self.locate(p) {
            Some(id) => id,
            None if self.off_mesh == OffMeshPolicy::Reject => {
                return Err(PolarGridError::OffMesh { x: p.x, y: p.y });
            }
            None => {
                debug!(x = p.x, y = p.y, "Point is off the mesh, falling back to element 0");
                0
            }
        };

        let value = self.element(id)?.value_at(p.x, p.y);
        trace!(x = p.x, y = p.y, element = id, value = value, "Interpolated value");
        Ok(value)
    }

    /// Interpolated value at a polar query point
    pub fn find_value_at_polar(&self, p: &PolarPoint) -> Result<f64> {
        self.find_value_at(&polar_to_cartesian(*p))
    }

    /// Interpolated values for a batch of points, in input order
    pub fn find_values_at(&self, points: &[CartesianPoint]) -> Result<Vec<f64>> {
        log_timed_operation("batch_query", || {
            points.iter().map(|p| self.find_value_at(p)).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::containment::ContainmentLocator;
    use pretty_assertions::assert_eq;

    fn ramp(n_x: usize, n_y: usize) -> Vec<f64> {
        (0..n_x * n_y).map(|i| i as f64).collect()
    }

    #[test]
    fn test_mesh_size() {
        for (n_x, n_y) in [(2, 2), (3, 2), (2, 5), (10, 10), (7, 4)] {
            let grid = InterpolatedGrid::build(&ramp(n_x, n_y), n_x, n_y, 1.0, 1.0).unwrap();
            assert_eq!(grid.len(), (n_x - 1) * (n_y - 1));
        }

        for (n_x, n_y) in [(0, 0), (1, 5), (5, 1), (0, 3)] {
            let grid = InterpolatedGrid::build(&ramp(n_x, n_y), n_x, n_y, 1.0, 1.0).unwrap();
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn test_element_ordering() {
        let grid = InterpolatedGrid::build(&ramp(3, 2), 3, 2, 1.0, 1.0).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.elements()[0].center(), CartesianPoint::new(1.0, 1.0));
        assert_eq!(grid.elements()[1].center(), CartesianPoint::new(2.0, 1.0));
    }

    #[test]
    fn test_corner_ids_and_values() {
        let grid = InterpolatedGrid::build(&ramp(4, 3), 4, 3, 2.0, 0.5).unwrap();

        let e = grid.element(0).unwrap();
        assert_eq!(e.corner_ids(), &[0, 1, 5, 4]);
        assert_eq!(e.corner_values(), &[0.0, 1.0, 5.0, 4.0]);
        assert_eq!(e.center(), CartesianPoint::new(2.0, 0.5));

        let e = grid.element(5).unwrap();
        assert_eq!(e.corner_ids(), &[6, 7, 11, 10]);
        assert_eq!(e.center(), CartesianPoint::new(6.0, 1.0));
        assert_eq!(e.width(), 2.0);
        assert_eq!(e.height(), 0.5);
    }

    #[test]
    fn test_corners_land_on_pixel_centers() {
        let samples = SampleGrid::new(ramp(5, 4), 5, 4, 1.5, 0.75).unwrap();
        let grid = InterpolatedGrid::from_sample_grid(&samples).unwrap();

        for element in grid.elements() {
            for (k, &id) in element.corner_ids().iter().enumerate() {
                let corner = element.corner(k).unwrap();
                let pixel = samples.position(id).unwrap();
                assert!((corner.x - pixel.x).abs() < 1e-9);
                assert!((corner.y - pixel.y).abs() < 1e-9);
                let v = element.value_at(pixel.x, pixel.y);
                assert!((v - samples.value(id).unwrap()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_short_samples() {
        let result = InterpolatedGrid::build(&[0.0; 5], 3, 2, 1.0, 1.0);
        assert!(matches!(
            result,
            Err(PolarGridError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_invalid_spacing() {
        let result = InterpolatedGrid::build(&ramp(3, 3), 3, 3, 0.0, 1.0);
        assert!(matches!(result, Err(PolarGridError::InvalidDimension { .. })));
    }

    #[test]
    fn test_source_mutation_has_no_effect() {
        let mut samples = vec![1.0; 9];
        let grid = InterpolatedGrid::build(&samples, 3, 3, 1.0, 1.0).unwrap();
        samples.iter_mut().for_each(|v| *v = -5.0);

        let v = grid.find_value_at(&CartesianPoint::new(1.6, 1.4)).unwrap();
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_break_first_wins() {
        let grid = InterpolatedGrid::build(&ramp(3, 2), 3, 2, 1.0, 1.0).unwrap();
        assert_eq!(grid.find_element_id(&CartesianPoint::new(1.5, 1.0)), 0);
    }

    #[test]
    fn test_off_mesh_legacy() {
        let grid = InterpolatedGrid::build(&ramp(4, 4), 4, 4, 1.0, 1.0).unwrap();
        let far = CartesianPoint::new(1000.0, 1000.0);

        assert_eq!(grid.locate(&far), None);
        assert_eq!(grid.find_element_id(&far), 0);

        let expected = grid.elements()[0].value_at(far.x, far.y);
        assert_eq!(grid.find_value_at(&far).unwrap(), expected);
    }

    #[test]
    fn test_off_mesh_reject() {
        let grid = InterpolatedGrid::build(&ramp(4, 4), 4, 4, 1.0, 1.0)
            .unwrap()
            .with_off_mesh_policy(OffMeshPolicy::Reject);

        let result = grid.find_value_at(&CartesianPoint::new(1000.0, 1000.0));
        assert!(matches!(result, Err(PolarGridError::OffMesh { .. })));
        assert!(grid.find_value_at(&CartesianPoint::new(2.2, 1.9)).is_ok());
    }

    #[test]
    fn test_empty_grid_query() {
        let grid = InterpolatedGrid::build(&[3.0], 1, 1, 1.0, 1.0).unwrap();
        let p = CartesianPoint::new(0.5, 0.5);

        assert_eq!(grid.find_element_id(&p), 0);
        assert!(matches!(
            grid.find_value_at(&p),
            Err(PolarGridError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_swap_locator() {
        let grid = InterpolatedGrid::build(&ramp(3, 3), 3, 3, 1.0, 1.0)
            .unwrap()
            .with_locator(Arc::new(ContainmentLocator));
        assert_eq!(grid.locator_name(), "containment");

        // inside element 3, centered at (2, 2)
        assert_eq!(grid.find_element_id(&CartesianPoint::new(2.4, 2.4)), 3);
        // left of the mesh: containment finds nothing
        assert_eq!(grid.locate(&CartesianPoint::new(0.2, 1.0)), None);
    }

    #[test]
    fn test_with_search_config() {
        let config = SearchConfig {
            locator: "containment".to_string(),
            off_mesh: OffMeshPolicy::Reject,
        };
        let grid = InterpolatedGrid::build(&ramp(3, 3), 3, 3, 1.0, 1.0)
            .unwrap()
            .with_search_config(&config)
            .unwrap();
        assert_eq!(grid.locator_name(), "containment");
        assert_eq!(grid.off_mesh_policy(), OffMeshPolicy::Reject);

        let bad = SearchConfig {
            locator: "octree".to_string(),
            ..SearchConfig::default()
        };
        let grid = InterpolatedGrid::build(&ramp(3, 3), 3, 3, 1.0, 1.0).unwrap();
        assert!(grid.with_search_config(&bad).is_err());
    }

    #[test]
    fn test_polar_and_batch_queries() {
        let grid = InterpolatedGrid::build(&ramp(5, 5), 5, 5, 1.0, 1.0).unwrap();
        let polar = PolarPoint::new(2.0, 0.5);
        let cartesian = polar_to_cartesian(polar);

        assert_eq!(
            grid.find_value_at_polar(&polar).unwrap(),
            grid.find_value_at(&cartesian).unwrap()
        );

        let points = [cartesian, CartesianPoint::new(1.0, 1.0), CartesianPoint::new(3.2, 2.9)];
        let values = grid.find_values_at(&points).unwrap();
        assert_eq!(values.len(), 3);
        for (p, v) in points.iter().zip(&values) {
            assert_eq!(*v, grid.find_value_at(p).unwrap());
        }
    }
}
