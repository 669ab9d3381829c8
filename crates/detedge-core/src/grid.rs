//! Row-major 2-D grids shared by images, masks and spectra.
//!
//! Every array that flows through the filtering pipeline has the same shape
//! as the input image, so a single generic container is used for real
//! samples, binary masks and complex spectra alike.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a buffer cannot be interpreted as a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The buffer length is not `rows * cols`.
    #[error("Buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `rows * cols` does not fit in `usize`.
    #[error("Grid of {rows}x{cols} is too large")]
    TooLarge { rows: usize, cols: usize },
}

/// Grid dimensions in rows (height) and columns (width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Number of cells, or `None` if `rows * cols` overflows.
    #[inline]
    pub fn checked_len(self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// True if either dimension is zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Zero-frequency position after centering: `(rows / 2, cols / 2)`.
    #[inline]
    pub fn center(self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    /// Smaller of the two dimensions.
    #[inline]
    pub fn min_dim(self) -> usize {
        self.rows.min(self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A row-major 2-D grid of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: Shape,
    data: Vec<T>,
}

/// Real-valued grayscale samples.
pub type Image = Grid<f64>;

impl<T> Grid<T> {
    /// Wrap a row-major buffer.
    ///
    /// # Errors
    /// - `GridError::TooLarge` if `rows * cols` overflows `usize`
    /// - `GridError::BufferSize` if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let shape = Shape::new(rows, cols);
        let expected = shape
            .checked_len()
            .ok_or(GridError::TooLarge { rows, cols })?;
        if data.len() != expected {
            return Err(GridError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.len());
        for i in 0..shape.rows {
            for j in 0..shape.cols {
                data.push(f(i, j));
            }
        }
        Self { shape, data }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.shape.rows && col < self.shape.cols {
            self.data.get(row * self.shape.cols + col)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`.
    pub fn filled(shape: Shape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Circularly rotate the grid so that cell `(i, j)` moves to
    /// `((i + shift_rows) mod rows, (j + shift_cols) mod cols)`.
    ///
    /// Negative shifts rotate the other way. An empty grid is returned as is.
    pub fn roll(&self, shift_rows: isize, shift_cols: isize) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let rows = self.shape.rows;
        let cols = self.shape.cols;
        let dr = shift_rows.rem_euclid(rows as isize) as usize;
        let dc = shift_cols.rem_euclid(cols as isize) as usize;

        let mut data = self.data.clone();
        for i in 0..rows {
            let dst_row = (i + dr) % rows;
            for j in 0..cols {
                let dst_col = (j + dc) % cols;
                data[dst_row * cols + dst_col] = self.data[i * cols + j].clone();
            }
        }
        Self {
            shape: self.shape,
            data,
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let rows = self.shape.rows;
        let cols = self.shape.cols;
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self.data[i * cols + j].clone());
            }
        }
        Self {
            shape: Shape::new(cols, rows),
            data,
        }
    }
}

impl Image {
    /// Cast 8-bit grayscale samples to floating point.
    pub fn from_u8(rows: usize, cols: usize, pixels: &[u8]) -> Result<Self, GridError> {
        Self::from_vec(rows, cols, pixels.iter().map(|&p| p as f64).collect())
    }

    /// Convert an already-decoded grayscale image.
    pub fn from_gray_image(img: &image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            shape: Shape::new(height as usize, width as usize),
            data: img.as_raw().iter().map(|&p| p as f64).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        let err = Grid::from_vec(2, 3, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            GridError::BufferSize {
                expected: 6,
                actual: 5
            }
        );
        assert!(Grid::from_vec(2, 3, vec![0u8; 6]).is_ok());
    }

    #[test]
    fn test_from_vec_rejects_overflowing_shape() {
        let err = Grid::<u8>::from_vec(usize::MAX, 2, vec![]).unwrap_err();
        assert_eq!(
            err,
            GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );

        let half = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Image::from_u8(half, half, &[]),
            Err(GridError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_checked_len() {
        assert_eq!(Shape::new(3, 4).checked_len(), Some(12));
        assert_eq!(Shape::new(0, usize::MAX).checked_len(), Some(0));
        assert_eq!(Shape::new(usize::MAX, 2).checked_len(), None);
    }

    #[test]
    fn test_shape_center_integer_division() {
        assert_eq!(Shape::new(4, 4).center(), (2, 2));
        assert_eq!(Shape::new(5, 7).center(), (2, 3));
        assert_eq!(Shape::new(1, 1).center(), (0, 0));
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(Shape::new(480, 640).to_string(), "480x640");
    }

    #[test]
    fn test_get_row_major() {
        let grid = Grid::from_vec(2, 3, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(0, 2), Some(&2));
        assert_eq!(grid.get(1, 0), Some(&3));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_roll_moves_origin_to_center() {
        let grid = Grid::from_fn(Shape::new(4, 6), |i, j| i * 6 + j);
        let rolled = grid.roll(2, 3);
        assert_eq!(rolled.get(2, 3), Some(&0));
        assert_eq!(rolled.get(0, 0), grid.get(2, 3));
    }

    #[test]
    fn test_roll_negative_undoes_positive_odd_shape() {
        let grid = Grid::from_fn(Shape::new(5, 3), |i, j| i * 3 + j);
        let back = grid.roll(2, 1).roll(-2, -1);
        assert_eq!(back, grid);
    }

    #[test]
    fn test_transpose() {
        let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = grid.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_from_u8_casts() {
        let img = Image::from_u8(1, 3, &[0, 128, 255]).unwrap();
        assert_eq!(img.as_slice(), &[0.0, 128.0, 255.0]);
    }

    #[test]
    fn test_from_gray_image_shape() {
        let gray = image::GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let img = Image::from_gray_image(&gray);
        assert_eq!(img.shape(), Shape::new(2, 3));
        assert_eq!(img.get(1, 0), Some(&4.0));
    }
}
