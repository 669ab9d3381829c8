//! 2-D discrete Fourier transforms over [`Grid`]s.
//!
//! Transforms use row-column decomposition on top of `rustfft`: a 1-D FFT
//! over every row, then over every column (via a transpose). Any grid shape
//! is accepted; `rustfft` handles non power-of-two lengths.
//!
//! The inverse transform is normalized by `1 / (rows * cols)`, so
//! `inverse(forward(x)) == x` up to rounding.

mod shift;

pub use shift::{fftshift, ifftshift};

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::grid::{Grid, Shape};

/// Complex grid produced by the forward transform.
pub type ComplexGrid = Grid<Complex<f64>>;

/// Planned forward and inverse 2-D FFTs for one grid shape.
pub struct Fft2d {
    shape: Shape,
    row_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>,
}

impl Fft2d {
    /// Plan transforms for grids of `shape`.
    ///
    /// Returns `None` if `shape` has no rows or no columns.
    pub fn new(shape: Shape) -> Option<Self> {
        if shape.is_empty() {
            return None;
        }

        let mut planner = FftPlanner::new();
        Some(Self {
            shape,
            row_forward: planner.plan_fft_forward(shape.cols),
            row_inverse: planner.plan_fft_inverse(shape.cols),
            col_forward: planner.plan_fft_forward(shape.rows),
            col_inverse: planner.plan_fft_inverse(shape.rows),
        })
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Forward transform of a real grid.
    pub fn forward(&self, image: &Grid<f64>) -> ComplexGrid {
        debug_assert_eq!(image.shape(), self.shape);
        let data = image.map(|&v| Complex::new(v, 0.0));
        self.process(data, &self.row_forward, &self.col_forward)
    }

    /// Normalized inverse transform.
    pub fn inverse(&self, spectrum: &ComplexGrid) -> ComplexGrid {
        debug_assert_eq!(spectrum.shape(), self.shape);
        let mut out = self.process(spectrum.clone(), &self.row_inverse, &self.col_inverse);

        let norm = 1.0 / self.shape.len() as f64;
        for v in out.as_mut_slice() {
            *v *= norm;
        }
        out
    }

    fn process(
        &self,
        mut data: ComplexGrid,
        row_fft: &Arc<dyn Fft<f64>>,
        col_fft: &Arc<dyn Fft<f64>>,
    ) -> ComplexGrid {
        // FFT on rows; rustfft processes the buffer in chunks of `cols`.
        row_fft.process(data.as_mut_slice());

        // FFT on columns (now rows after transpose)
        let mut transposed = data.transpose();
        col_fft.process(transposed.as_mut_slice());

        // Transpose back
        transposed.transpose()
    }
}
