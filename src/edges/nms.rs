//! Non-maximum suppression on gradient magnitude along quantized directions.
//!
//! Each interior pixel is compared against the two neighbors selected by
//! [`Direction::neighbor_offsets`]. It keeps its magnitude when it is greater
//! than or equal to both, so a flat ridge of equal magnitudes survives intact.
//! The outermost 1-pixel frame has no full 3×3 neighborhood and is always
//! zero; nothing outside the grid is ever read.
use super::direction::{Direction, QuantizedDirection};
use crate::error::CannyError;
use crate::image::{Grid, ImageView};

/// Suppress every magnitude that is not a local maximum along its direction.
///
/// Fails with [`CannyError::ShapeMismatch`] when the two grids disagree.
pub fn suppress(magnitude: &Grid, direction: &QuantizedDirection) -> Result<Grid, CannyError> {
    magnitude.ensure_same_shape(direction.shape())?;

    let (rows, cols) = magnitude.shape();
    if rows < 3 || cols < 3 {
        return Ok(Grid::new(rows, cols));
    }

    Ok(Grid::par_from_rows(rows, cols, |y, out_row| {
        if y == 0 || y == rows - 1 {
            return;
        }
        let mag_row = magnitude.row(y);
        for x in 1..cols - 1 {
            let m = mag_row[x];
            if is_local_max(magnitude, y, x, m, direction.get(y, x)) {
                out_row[x] = m;
            }
        }
    }))
}

#[inline]
fn is_local_max(magnitude: &Grid, y: usize, x: usize, m: f32, dir: Direction) -> bool {
    dir.neighbor_offsets().iter().all(|&(dy, dx)| {
        // Interior pixels only, so both offsets stay in range.
        let ny = (y as isize + dy) as usize;
        let nx = (x as isize + dx) as usize;
        m >= magnitude.get(ny, nx)
    })
}
