//! Core types for spectral filtering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{GridError, Image, Shape};

/// Scale applied to the natural-log magnitude of the centered spectrum.
pub const PRE_MASK_SCALE: f64 = 20.0;

/// Scale applied to the natural-log magnitude of the masked spectrum.
///
/// Masked magnitudes are much smaller than the full spectrum, so the
/// display scalar is larger to keep both diagnostics visually comparable.
pub const POST_MASK_SCALE: f64 = 2000.0;

/// Error types for spectral filtering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The image has zero rows or zero columns.
    #[error("Image is empty ({0})")]
    EmptyImage(Shape),

    /// A mask was applied to a spectrum of a different shape.
    #[error("Mask shape {mask} does not match image shape {image}")]
    ShapeMismatch { image: Shape, mask: Shape },

    /// A pixel buffer could not be turned into a grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Display scalars for the diagnostic spectra.
///
/// These are empirical display constants, not derived quantities; inputs
/// with a very different value range may need recalibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Multiplier for `ln|F|` before masking.
    pub pre_mask_scale: f64,
    /// Multiplier for `ln|F|` after masking.
    pub post_mask_scale: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            pre_mask_scale: PRE_MASK_SCALE,
            post_mask_scale: POST_MASK_SCALE,
        }
    }
}

/// Result of one filtering pass. Every grid has the input image's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    /// Spatial-domain result: modulus of the inverse transform, unclamped.
    pub filtered: Image,
    /// Scaled log-magnitude of the centered spectrum before masking.
    pub spectrum: Image,
    /// Scaled log-magnitude of the centered spectrum after masking.
    /// Zeroed bins are `-inf`.
    pub masked_spectrum: Image,
}

impl FilterOutput {
    /// Split into `(filtered, (spectrum, masked_spectrum))`.
    pub fn into_parts(self) -> (Image, (Image, Image)) {
        (self.filtered, (self.spectrum, self.masked_spectrum))
    }

    pub fn shape(&self) -> Shape {
        self.filtered.shape()
    }
}
