//! # polargrid
//!
//! Resample a discretely sampled 2D scalar field (an image, a raster) at
//! arbitrary points given in polar coordinates.
//!
//! ## Pipeline
//!
//! 1. Wrap the samples in a [`SampleGrid`] (or pass a flat slice directly)
//! 2. Build an [`InterpolatedGrid`]: one bilinear element per interior 2x2
//!    block of samples
//! 3. Convert the polar query point with [`polar_to_cartesian`]
//! 4. Locate the element and evaluate its shape-function interpolant
//!
//! ```no_run
//! use polargrid::{InterpolatedGrid, PolarPoint};
//!
//! let samples = vec![1.0; 100];
//! let grid = InterpolatedGrid::build(&samples, 10, 10, 1.0, 1.0)?;
//! let value = grid.find_value_at_polar(&PolarPoint::new(1.1, 0.2))?;
//! # Ok::<(), polargrid::PolarGridError>(())
//! ```
//!
//! Element search defaults to the nearest element center within a bound
//! derived from the cell spacing. Points beyond that bound fall back to
//! element 0 unless the grid is configured with [`OffMeshPolicy::Reject`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolation;
pub mod logging;
pub mod samples;

pub use config::{Config, SearchConfig};
pub use error::{PolarGridError, Result};
pub use geometry::{polar_to_cartesian, CartesianPoint, PolarPoint};
pub use interpolation::{
    get_locator, ElementLocator, InterpolatedGrid, InterpolationElement, OffMeshPolicy,
};
pub use logging::{
    init_tracing, log_error, log_grid_build_stats, log_operation_end, log_operation_start,
    log_timed_operation,
};
pub use samples::{Pixel, SampleGrid};
