//! Test data generation utilities.
//!
//! Row-major sample arrays with known patterns. Row `r`, column `c` lives at
//! flat index `r * n_x + c`.

#![allow(dead_code)]

/// A `size x size` image whose first `size / 2` rows are `1.0` and the rest `0.0`.
pub fn half_filled_image(size: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(size * size);
    for row in 0..size {
        let v = if row < size / 2 { 1.0 } else { 0.0 };
        values.extend(std::iter::repeat(v).take(size));
    }
    values
}

/// Samples of the plane `a*x + b*y + c` at the pixel centers of a grid with
/// the given spacing. Bilinear interpolation reproduces it exactly.
pub fn linear_field(
    n_x: usize,
    n_y: usize,
    cell_width: f64,
    cell_height: f64,
    (a, b, c): (f64, f64, f64),
) -> Vec<f64> {
    let mut values = Vec::with_capacity(n_x * n_y);
    for row in 0..n_y {
        for col in 0..n_x {
            let x = cell_width / 2.0 + col as f64 * cell_width;
            let y = cell_height / 2.0 + row as f64 * cell_height;
            values.push(a * x + b * y + c);
        }
    }
    values
}

/// Flat indices `0, 1, 2, ...` as values
pub fn ramp(n_x: usize, n_y: usize) -> Vec<f64> {
    (0..n_x * n_y).map(|i| i as f64).collect()
}
