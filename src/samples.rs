//! Rectangular sample arrays.
//!
//! A [`SampleGrid`] is the input side of the mesh: a row-major array of
//! `n_x * n_y` samples with uniform physical spacing. Sample `(row, col)`
//! sits at the pixel center `(w/2 + col*w, h/2 + row*h)`, which is where the
//! corners of the elements built over it land.
//!
//! Samples of other numeric types (`u8` images, `f32` rasters, ...) are
//! widened to `f64` on the way in.

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::error::{PolarGridError, Result};
use crate::geometry::CartesianPoint;

/// A single sample with its flat id and physical position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    pub id: usize,
    pub value: f64,
    pub position: CartesianPoint,
}

/// A row-major rectangular array of samples with uniform spacing
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    values: Vec<f64>,
    n_x: usize,
    n_y: usize,
    cell_width: f64,
    cell_height: f64,
}

impl SampleGrid {
    /// Create a sample grid.
    ///
    /// `values` must hold at least `n_x * n_y` samples; any extra trailing
    /// samples are dropped.
    pub fn new(
        mut values: Vec<f64>,
        n_x: usize,
        n_y: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self> {
        check_spacing(cell_width, cell_height)?;

        let count = required_len(n_x, n_y)?;
        if values.len() < count {
            return Err(PolarGridError::IndexOutOfRange {
                index: count.saturating_sub(1),
                len: values.len(),
            });
        }
        values.truncate(count);

        Ok(Self {
            values,
            n_x,
            n_y,
            cell_width,
            cell_height,
        })
    }

    /// A grid where every sample holds `base_value`
    pub fn uniform(
        n_x: usize,
        n_y: usize,
        cell_width: f64,
        cell_height: f64,
        base_value: f64,
    ) -> Result<Self> {
        let count = required_len(n_x, n_y)?;
        Self::new(vec![base_value; count], n_x, n_y, cell_width, cell_height)
    }

    /// Widen samples of any lossless-to-`f64` type
    pub fn from_samples<T>(
        samples: &[T],
        n_x: usize,
        n_y: usize,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let values = samples.iter().map(|&v| v.into()).collect();
        Self::new(values, n_x, n_y, cell_width, cell_height)
    }

    /// Build from a 2D array view; rows run along y, columns along x
    pub fn from_array<T>(
        array: ArrayView2<'_, T>,
        cell_width: f64,
        cell_height: f64,
    ) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        let (n_y, n_x) = array.dim();
        let values = array.iter().map(|&v| v.into()).collect();
        Self::new(values, n_x, n_y, cell_width, cell_height)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn n_x(&self) -> usize {
        self.n_x
    }

    pub fn n_y(&self) -> usize {
        self.n_y
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample value for flat id `row * n_x + col`
    pub fn value(&self, id: usize) -> Result<f64> {
        self.values
            .get(id)
            .copied()
            .ok_or(PolarGridError::IndexOutOfRange {
                index: id,
                len: self.values.len(),
            })
    }

    /// Pixel-center position of sample `id`
    pub fn position(&self, id: usize) -> Result<CartesianPoint> {
        if id >= self.values.len() {
            return Err(PolarGridError::IndexOutOfRange {
                index: id,
                len: self.values.len(),
            });
        }
        Ok(self.pixel_center(id))
    }

    /// All samples in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(id, &value)| Pixel {
                id,
                value,
                position: self.pixel_center(id),
            })
    }

    fn pixel_center(&self, id: usize) -> CartesianPoint {
        let row = id / self.n_x;
        let col = id % self.n_x;
        CartesianPoint {
            x: self.cell_width / 2.0 + col as f64 * self.cell_width,
            y: self.cell_height / 2.0 + row as f64 * self.cell_height,
        }
    }
}

pub(crate) fn required_len(n_x: usize, n_y: usize) -> Result<usize> {
    n_x.checked_mul(n_y)
        .ok_or_else(|| PolarGridError::InvalidParameter {
            param: "shape".to_string(),
            message: format!("{} x {} samples overflows usize", n_x, n_y),
        })
}

pub(crate) fn check_spacing(cell_width: f64, cell_height: f64) -> Result<()> {
    for (name, value) in [("cell_width", cell_width), ("cell_height", cell_height)] {
        if value.is_nan() || value <= 0.0 {
            return Err(PolarGridError::InvalidDimension {
                message: format!("{} must be positive, got {}", name, value),
            });
        }
    }
    Ok(())
}
