//! Zero-frequency centering.
//!
//! The DFT places the zero frequency at `(0, 0)`. `fftshift` rotates the grid
//! by `(rows / 2, cols / 2)` so it lands at the geometric center used by the
//! mask geometry; `ifftshift` rotates by the negated amounts. For odd
//! dimensions the two are not the same rotation, so the inverse must always
//! be `ifftshift`.

use crate::grid::Grid;

/// Move the zero-frequency cell from `(0, 0)` to `(rows / 2, cols / 2)`.
pub fn fftshift<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (dr, dc) = grid.shape().center();
    grid.roll(dr as isize, dc as isize)
}

/// Undo [`fftshift`].
pub fn ifftshift<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    let (dr, dc) = grid.shape().center();
    grid.roll(-(dr as isize), -(dc as isize))
}
