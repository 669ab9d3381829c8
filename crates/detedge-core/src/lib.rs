//! detedge Core - Frequency-domain image filtering
//!
//! This crate filters a grayscale image in the 2-D frequency domain: it
//! transforms the image with an FFT, keeps or zeroes frequencies with a
//! radial low-pass, high-pass or band-pass mask centered on the zero
//! frequency, and transforms back. Log-magnitude spectra before and after
//! masking are returned for visualization.
//!
//! # Example
//!
//! ```ignore
//! use detedge_core::{detect_edges, FilterKind, Image};
//!
//! let image = Image::from_u8(rows, cols, &gray_pixels)?;
//! let kind = FilterKind::HighPass { radius: 9.0 }.to_pixels(image.shape());
//! let (filtered, (spectrum, masked)) = detect_edges(&image, kind)?.into_parts();
//! ```

pub mod display;
pub mod fft;
pub mod filter;
pub mod grid;
pub mod mask;

pub use filter::{
    detect_edges, FilterConfig, FilterError, FilterOutput, SpectralFilter, POST_MASK_SCALE,
    PRE_MASK_SCALE,
};
pub use grid::{Grid, GridError, Image, Shape};
pub use mask::{
    band_pass, high_pass, low_pass, percent_to_radius, FilterKind, Mask, DEFAULT_BAND_PERCENT,
    DEFAULT_RADIUS_PERCENT,
};
