//! Conversion of filter outputs to 8-bit samples for display.
//!
//! Filter outputs are unclamped `f64` grids and diagnostics may hold `-inf`.
//! Two coercions are offered:
//! - [`to_u8_saturating`]: truncate toward zero and clamp to `0..=255`,
//!   the direct cast used for the filtered image
//! - [`normalize_to_u8`]: min-max stretch of the finite values, useful for
//!   diagnostic spectra whose range is far outside `0..=255`

use crate::grid::{Grid, Image, Shape};

/// Truncating, saturating cast of one sample.
///
/// NaN maps to 0, `-inf` to 0 and `+inf` to 255.
#[inline]
pub fn sample_to_u8(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    value as u8
}

/// Cast every sample with [`sample_to_u8`].
pub fn to_u8_saturating(grid: &Image) -> Grid<u8> {
    grid.map(|&v| sample_to_u8(v))
}

/// Linearly stretch finite samples so the smallest maps to 0 and the largest
/// to 255. Non-finite samples map to 0. A grid with no spread (or no finite
/// samples) maps to all zeros.
pub fn normalize_to_u8(grid: &Image) -> Grid<u8> {
    let (min, max) = grid
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return Grid::filled(grid.shape(), 0);
    }

    grid.map(|&v| {
        if v.is_finite() {
            ((v - min) / range * 255.0).round() as u8
        } else {
            0
        }
    })
}

/// Wrap 8-bit samples as an `image::GrayImage`.
///
/// Returns `None` if the dimensions do not fit in `u32`.
pub fn to_gray_image(grid: &Grid<u8>) -> Option<image::GrayImage> {
    let Shape { rows, cols } = grid.shape();
    let width = u32::try_from(cols).ok()?;
    let height = u32::try_from(rows).ok()?;
    image::GrayImage::from_raw(width, height, grid.as_slice().to_vec())
}
