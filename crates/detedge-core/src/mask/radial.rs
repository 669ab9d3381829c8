//! Radial binary masks over a centered frequency grid.
//!
//! All three masks share the same geometry: the zero frequency sits at
//! `(rows / 2, cols / 2)` once the spectrum has been centered, and a cell
//! `(i, j)` is classified by its squared distance
//! `d2 = (i - center_row)^2 + (j - center_col)^2` from that point.
//!
//! Radii are compared squared, so a negative radius behaves like its
//! absolute value. Radii are not validated: a band with `inner > outer`
//! simply selects nothing.

use super::Mask;
use crate::grid::{Grid, Shape};

/// Squared distance from the frequency origin for each cell of `shape`.
#[inline]
fn squared_distance(shape: Shape, row: usize, col: usize) -> f64 {
    let (center_row, center_col) = shape.center();
    let dr = row as i64 - center_row as i64;
    let dc = col as i64 - center_col as i64;
    (dr * dr + dc * dc) as f64
}

/// Build a 0/1 mask from a predicate on squared distance.
fn radial_mask(shape: Shape, keep: impl Fn(f64) -> bool) -> Mask {
    Grid::from_fn(shape, |i, j| keep(squared_distance(shape, i, j)) as u8)
}

/// Low-pass mask: keeps the filled disk of `radius` around the center.
///
/// `mask[i, j] = 1` iff `d2(i, j) <= radius^2`.
pub fn low_pass(shape: Shape, radius: f64) -> Mask {
    let r2 = radius * radius;
    radial_mask(shape, |d2| d2 <= r2)
}

/// High-pass mask: zeros the disk of `radius` around the center.
///
/// Exact complement of [`low_pass`] for the same shape and radius.
pub fn high_pass(shape: Shape, radius: f64) -> Mask {
    let r2 = radius * radius;
    radial_mask(shape, |d2| d2 > r2)
}

/// Band-pass mask: keeps the closed annulus between `inner` and `outer`.
///
/// `mask[i, j] = 1` iff `inner^2 <= d2(i, j) <= outer^2`.
pub fn band_pass(shape: Shape, inner: f64, outer: f64) -> Mask {
    let inner2 = inner * inner;
    let outer2 = outer * outer;
    radial_mask(shape, |d2| inner2 <= d2 && d2 <= outer2)
}

/// Squared distance from the frequency origin to the farthest cell of `shape`.
pub fn max_radius_sq(shape: Shape) -> f64 {
    if shape.is_empty() {
        return 0.0;
    }
    let corners = [
        (0, 0),
        (0, shape.cols - 1),
        (shape.rows - 1, 0),
        (shape.rows - 1, shape.cols - 1),
    ];
    corners
        .iter()
        .map(|&(i, j)| squared_distance(shape, i, j))
        .fold(0.0, f64::max)
}

/// Distance from the frequency origin to the farthest cell of `shape`.
///
/// Any low-pass radius at or beyond this keeps every frequency. The result
/// is rounded up so that `radius * radius` never falls below
/// [`max_radius_sq`].
pub fn max_radius(shape: Shape) -> f64 {
    let d2 = max_radius_sq(shape);
    let mut r = d2.sqrt();
    while r * r < d2 {
        // Next representable value above a positive finite float.
        r = f64::from_bits(r.to_bits() + 1);
    }
    r
}
