//! Binary frequency masks for spectral filtering
//!
//! A mask is a grid of `0`/`1` values with the same shape as the image it
//! filters: `1` keeps a frequency component, `0` zeroes it.
//!
//! ## Mask Types
//!
//! - **Low-pass**: keeps a disk around the zero frequency (blurs)
//! - **High-pass**: zeroes a disk around the zero frequency (edges and noise)
//! - **Band-pass**: keeps an annulus between two radii
//!
//! The variant and its radii travel together as a [`FilterKind`], resolved
//! into a concrete mask by [`FilterKind::build_mask`].

pub mod radial;

pub use radial::{band_pass, high_pass, low_pass, max_radius, max_radius_sq};

use crate::grid::{Grid, Shape};
use serde::{Deserialize, Serialize};

/// Frequency mask: `1` = keep, `0` = zero.
pub type Mask = Grid<u8>;

/// Default low/high-pass radius, in percent of the smaller image dimension.
pub const DEFAULT_RADIUS_PERCENT: f64 = 9.0;

/// Default band-pass radii `(inner, outer)`, in percent of the smaller image dimension.
pub const DEFAULT_BAND_PERCENT: (f64, f64) = (5.0, 12.0);

impl Mask {
    /// A mask that keeps every frequency.
    pub fn ones(shape: Shape) -> Self {
        Grid::filled(shape, 1)
    }

    /// Flip every bit: kept frequencies are zeroed and vice versa.
    pub fn complement(&self) -> Self {
        self.map(|&v| u8::from(v == 0))
    }

    /// Number of frequencies the mask keeps.
    pub fn count_kept(&self) -> usize {
        self.iter().filter(|&&v| v != 0).count()
    }
}

/// Filter selection with its radius payload.
///
/// Radii are in pixels of the frequency grid unless converted with
/// [`FilterKind::to_pixels`]. Band-pass expects `inner <= outer`; this is
/// not enforced and an inverted band yields an empty mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterKind {
    /// Keep frequencies within `radius` of the origin.
    LowPass { radius: f64 },
    /// Zero frequencies within `radius` of the origin.
    HighPass { radius: f64 },
    /// Keep frequencies with distance in `[inner, outer]`.
    BandPass { inner: f64, outer: f64 },
}

impl FilterKind {
    /// Low-pass at [`DEFAULT_RADIUS_PERCENT`] (percent units).
    pub fn default_low_pass() -> Self {
        FilterKind::LowPass {
            radius: DEFAULT_RADIUS_PERCENT,
        }
    }

    /// High-pass at [`DEFAULT_RADIUS_PERCENT`] (percent units).
    pub fn default_high_pass() -> Self {
        FilterKind::HighPass {
            radius: DEFAULT_RADIUS_PERCENT,
        }
    }

    /// Band-pass at [`DEFAULT_BAND_PERCENT`] (percent units).
    pub fn default_band_pass() -> Self {
        FilterKind::BandPass {
            inner: DEFAULT_BAND_PERCENT.0,
            outer: DEFAULT_BAND_PERCENT.1,
        }
    }

    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::LowPass { .. } => "low_pass",
            FilterKind::HighPass { .. } => "high_pass",
            FilterKind::BandPass { .. } => "band_pass",
        }
    }

    /// Reinterpret every radius as a percentage of `min(rows, cols)` and
    /// convert it to pixels for `shape`.
    pub fn to_pixels(self, shape: Shape) -> Self {
        match self {
            FilterKind::LowPass { radius } => FilterKind::LowPass {
                radius: percent_to_radius(radius, shape),
            },
            FilterKind::HighPass { radius } => FilterKind::HighPass {
                radius: percent_to_radius(radius, shape),
            },
            FilterKind::BandPass { inner, outer } => FilterKind::BandPass {
                inner: percent_to_radius(inner, shape),
                outer: percent_to_radius(outer, shape),
            },
        }
    }

    /// Resolve the selection into a concrete mask for `shape`.
    pub fn build_mask(&self, shape: Shape) -> Mask {
        match *self {
            FilterKind::LowPass { radius } => low_pass(shape, radius),
            FilterKind::HighPass { radius } => high_pass(shape, radius),
            FilterKind::BandPass { inner, outer } => {
                if inner > outer {
                    tracing::warn!(
                        inner,
                        outer,
                        "band_pass inner radius exceeds outer, mask is empty"
                    );
                }
                band_pass(shape, inner, outer)
            }
        }
    }
}

/// Convert a radius given as a percentage of the smaller image dimension
/// into pixels: `percent * min(rows, cols) / 100`.
#[inline]
pub fn percent_to_radius(percent: f64, shape: Shape) -> f64 {
    percent * shape.min_dim() as f64 / 100.0
}
