//! Frequency-domain filtering of grayscale images.
//!
//! # Pipeline
//!
//! For an image of shape `rows x cols`:
//! 1. Build the mask for the selected [`FilterKind`]
//! 2. Forward 2-D DFT of the image cast to `f64`
//! 3. `fftshift` so the zero frequency sits at `(rows / 2, cols / 2)`
//! 4. Pre-mask diagnostic `20 * ln|F|`
//! 5. Multiply by the mask
//! 6. Post-mask diagnostic `2000 * ln|F|`
//! 7. `ifftshift`
//! 8. Inverse 2-D DFT and elementwise modulus
//!
//! Diagnostics may contain `-inf` where a bin is exactly zero. They are for
//! display only and never feed back into the filtered image.
//!
//! # Concurrency
//!
//! Each call plans its own FFTs and owns all intermediate buffers, so
//! independent calls can run on separate threads.

mod spectrum;
mod types;

pub use spectrum::{CenteredSpectrum, MaskedSpectrum, RawSpectrum};
pub use types::{FilterConfig, FilterError, FilterOutput, POST_MASK_SCALE, PRE_MASK_SCALE};

use crate::fft::Fft2d;
use crate::grid::Image;
use crate::mask::{FilterKind, Mask};

/// Applies radial frequency masks to images.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpectralFilter {
    config: FilterConfig,
}

impl SpectralFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter `image` with the mask selected by `kind`.
    ///
    /// # Errors
    /// `FilterError::EmptyImage` if the image has no rows or no columns.
    pub fn detect_edges(&self, image: &Image, kind: FilterKind) -> Result<FilterOutput, FilterError> {
        if image.is_empty() {
            return Err(FilterError::EmptyImage(image.shape()));
        }
        let mask = kind.build_mask(image.shape());

        tracing::debug!(
            shape = %image.shape(),
            filter = kind.name(),
            kept = mask.count_kept(),
            total = mask.len(),
            "detect_edges"
        );

        self.apply(image, &mask)
    }

    /// Filter `image` with a caller-supplied mask.
    ///
    /// # Errors
    /// - `FilterError::EmptyImage` if the image has no rows or no columns
    /// - `FilterError::ShapeMismatch` if `mask` differs in shape from `image`
    pub fn apply(&self, image: &Image, mask: &Mask) -> Result<FilterOutput, FilterError> {
        let fft = Fft2d::new(image.shape()).ok_or(FilterError::EmptyImage(image.shape()))?;

        let centered = RawSpectrum::forward(&fft, image).center();
        let spectrum = centered.log_magnitude(self.config.pre_mask_scale);

        let masked = centered.apply_mask(mask)?;
        let masked_spectrum = masked.log_magnitude(self.config.post_mask_scale);

        let filtered = masked.reconstruct(&fft);

        Ok(FilterOutput {
            filtered,
            spectrum,
            masked_spectrum,
        })
    }
}

/// Filter `image` with the default diagnostic scales.
///
/// Returns `(filtered, (spectrum, masked_spectrum))` via
/// [`FilterOutput::into_parts`] if the tuple form is preferred.
pub fn detect_edges(image: &Image, kind: FilterKind) -> Result<FilterOutput, FilterError> {
    SpectralFilter::default().detect_edges(image, kind)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::grid::Shape;
    use proptest::prelude::*;

    /// Strategy for generating small 8-bit images.
    fn image_strategy() -> impl Strategy<Value = Image> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<u8>(), rows * cols..=rows * cols).prop_map(move |px| {
                Image::from_u8(rows, cols, &px).expect("strategy builds matching buffers")
            })
        })
    }

    proptest! {
        /// Property: an all-ones mask reproduces the input.
        #[test]
        fn prop_full_mask_roundtrip(img in image_strategy()) {
            let mask = Mask::ones(img.shape());
            let out = SpectralFilter::default().apply(&img, &mask).unwrap();
            for (a, b) in out.filtered.iter().zip(img.iter()) {
                prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b);
            }
        }

        /// Property: every output has the input's shape.
        #[test]
        fn prop_shape_preserved(img in image_strategy(), radius in 0.0f64..10.0) {
            let shape: Shape = img.shape();
            let out = detect_edges(&img, FilterKind::HighPass { radius }).unwrap();
            prop_assert_eq!(out.filtered.shape(), shape);
            prop_assert_eq!(out.spectrum.shape(), shape);
            prop_assert_eq!(out.masked_spectrum.shape(), shape);
        }

        /// Property: the filtered image is never negative or non-finite.
        #[test]
        fn prop_filtered_finite_non_negative(img in image_strategy(), inner in 0.0f64..5.0, width in 0.0f64..5.0) {
            let kind = FilterKind::BandPass { inner, outer: inner + width };
            let out = detect_edges(&img, kind).unwrap();
            prop_assert!(out.filtered.iter().all(|v| v.is_finite() && *v >= 0.0));
        }

        /// Property: mismatched masks are rejected, never broadcast.
        #[test]
        fn prop_mismatch_rejected(img in image_strategy(), extra in 1usize..4) {
            let shape = img.shape();
            let mask = Mask::ones(Shape::new(shape.rows, shape.cols + extra));
            let result = SpectralFilter::default().apply(&img, &mask);
            let is_mismatch = matches!(result, Err(FilterError::ShapeMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}
