//! The three states of an image spectrum inside the filter pipeline.
//!
//! ```text
//! RawSpectrum --center()--> CenteredSpectrum --apply_mask()--> MaskedSpectrum --reconstruct()--> Image
//! ```
//!
//! Each transition consumes the previous state, so a diagnostic taken from a
//! `CenteredSpectrum` can never observe the masked values.

use crate::fft::{fftshift, ifftshift, ComplexGrid, Fft2d};
use crate::grid::Image;
use crate::mask::Mask;

use super::types::FilterError;

/// Spectrum as produced by the forward DFT, zero frequency at `(0, 0)`.
#[derive(Debug, Clone)]
pub struct RawSpectrum(ComplexGrid);

/// Spectrum with the zero frequency moved to `(rows / 2, cols / 2)`.
#[derive(Debug, Clone)]
pub struct CenteredSpectrum(ComplexGrid);

/// Centered spectrum after the mask has been applied.
#[derive(Debug, Clone)]
pub struct MaskedSpectrum(ComplexGrid);

/// `scale * ln|z|` for every bin. Zero bins give `-inf`.
fn log_magnitude(grid: &ComplexGrid, scale: f64) -> Image {
    grid.map(|z| scale * z.norm().ln())
}

impl RawSpectrum {
    /// Forward-transform `image`; the caller's buffer is left untouched.
    pub fn forward(fft: &Fft2d, image: &Image) -> Self {
        Self(fft.forward(image))
    }

    /// Move the zero frequency to the grid center.
    pub fn center(self) -> CenteredSpectrum {
        CenteredSpectrum(fftshift(&self.0))
    }

    pub fn bins(&self) -> &ComplexGrid {
        &self.0
    }
}

impl CenteredSpectrum {
    /// Scaled log-magnitude diagnostic.
    pub fn log_magnitude(&self, scale: f64) -> Image {
        log_magnitude(&self.0, scale)
    }

    /// Multiply every bin by the corresponding mask value.
    ///
    /// # Errors
    /// `FilterError::ShapeMismatch` if the mask and spectrum differ in shape.
    pub fn apply_mask(self, mask: &Mask) -> Result<MaskedSpectrum, FilterError> {
        if mask.shape() != self.0.shape() {
            return Err(FilterError::ShapeMismatch {
                image: self.0.shape(),
                mask: mask.shape(),
            });
        }

        let mut bins = self.0;
        for (z, &m) in bins.as_mut_slice().iter_mut().zip(mask.iter()) {
            *z *= m as f64;
        }
        Ok(MaskedSpectrum(bins))
    }

    pub fn bins(&self) -> &ComplexGrid {
        &self.0
    }
}

impl MaskedSpectrum {
    /// Scaled log-magnitude diagnostic.
    pub fn log_magnitude(&self, scale: f64) -> Image {
        log_magnitude(&self.0, scale)
    }

    /// Undo centering, inverse-transform, and take the modulus of each sample.
    ///
    /// The modulus discards the imaginary rounding residue of the inverse
    /// transform. No logarithm is involved, so the result is always finite.
    pub fn reconstruct(self, fft: &Fft2d) -> Image {
        let uncentered = ifftshift(&self.0);
        fft.inverse(&uncentered).map(|z| z.norm())
    }

    pub fn bins(&self) -> &ComplexGrid {
        &self.0
    }
}
