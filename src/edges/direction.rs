//! Quantization of undirected gradient angles into four canonical bins.
//!
//! Bin centers are 0°, 45°, 90° and 135°; bin edges sit at 22.5°, 67.5°,
//! 112.5° and 157.5°, and `[157.5, 180)` wraps back to the 0° bin. A value
//! exactly on an edge belongs to the higher center, so every angle has exactly
//! one bin.
use crate::error::CannyError;
use crate::image::Grid;
use rayon::prelude::*;
use serde::Serialize;

/// Canonical edge-normal orientation. The 180° bin is `Deg0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[default]
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

/// `(row, col)` offsets of the two neighbors compared during suppression,
/// indexed by `Direction as usize`.
const NEIGHBOR_OFFSETS: [[(isize, isize); 2]; 4] = [
    [(-1, 0), (1, 0)],
    [(-1, 1), (1, -1)],
    [(0, -1), (0, 1)],
    [(-1, -1), (1, 1)],
];

const BINS: [Direction; 4] = [
    Direction::Deg0,
    Direction::Deg45,
    Direction::Deg90,
    Direction::Deg135,
];

impl Direction {
    /// Quantize an angle in degrees. Inputs outside `[0, 180)` are folded
    /// modulo 180 first; non-finite input lands in `Deg0`.
    #[inline]
    pub fn from_degrees(angle: f32) -> Self {
        if !angle.is_finite() {
            return Direction::Deg0;
        }
        // floor((a + 22.5) / 45) puts each edge value in the upper bin.
        let bin = ((angle + 22.5) / 45.0).floor() as i64;
        BINS[bin.rem_euclid(4) as usize]
    }

    /// Bin center in degrees (`Deg0` reports 0, never 180).
    pub fn degrees(self) -> f32 {
        match self {
            Direction::Deg0 => 0.0,
            Direction::Deg45 => 45.0,
            Direction::Deg90 => 90.0,
            Direction::Deg135 => 135.0,
        }
    }

    /// The two neighbor offsets compared against during suppression.
    #[inline]
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        NEIGHBOR_OFFSETS[self as usize]
    }
}

/// Per-pixel quantized directions, same shape as the angle grid.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantizedDirection {
    rows: usize,
    cols: usize,
    data: Vec<Direction>,
}

impl QuantizedDirection {
    pub fn filled(rows: usize, cols: usize, direction: Direction) -> Self {
        Self {
            rows,
            cols,
            data: vec![direction; rows * cols],
        }
    }

    /// Wrap a row-major label buffer. Fails with `ShapeMismatch` when
    /// `data.len() != rows * cols`, as [`Grid::from_vec`] does.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Direction>) -> Result<Self, CannyError> {
        if data.len() != rows * cols {
            return Err(CannyError::ShapeMismatch {
                expected: (rows, cols),
                actual: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Direction {
        self.data[row * self.cols + col]
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.data
    }

    /// Bin centers as a float grid (180° reported as 0°).
    pub fn to_degrees_grid(&self) -> Grid {
        let cols = self.cols;
        Grid::par_from_rows(self.rows, cols, |y, out| {
            for (o, d) in out.iter_mut().zip(&self.data[y * cols..(y + 1) * cols]) {
                *o = d.degrees();
            }
        })
    }
}

/// Quantize every angle of `angles` (degrees) into its canonical bin.
pub fn quantize(angles: &Grid) -> QuantizedDirection {
    let (rows, cols) = angles.shape();
    let data = angles
        .as_slice()
        .par_iter()
        .map(|&a| Direction::from_degrees(a))
        .collect();
    QuantizedDirection { rows, cols, data }
}
