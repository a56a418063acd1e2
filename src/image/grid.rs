//! Owned single-channel `f32` grid in row-major layout.
//!
//! The grid is the currency of every pipeline stage: a stage borrows its
//! input grid(s) and returns a freshly allocated grid of the same shape.
//! Indexing is `(row, col)`, top-to-bottom and left-to-right.
use super::traits::{ImageView, ImageViewMut};
use super::ImageU8;
use crate::error::CannyError;
use rayon::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Zero-initialized grid of shape `rows × cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f32) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Wrap a row-major buffer.
    ///
    /// Fails with `ShapeMismatch` when `data.len() != rows * cols`; the
    /// reported actual shape is the buffer as a single row.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, CannyError> {
        if data.len() != rows * cols {
            return Err(CannyError::ShapeMismatch {
                expected: (rows, cols),
                actual: (1, data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows; every row must have the first row's length.
    /// A ragged row `y` is reported as `ShapeMismatch` with actual
    /// `(y, row.len())`.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, CannyError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(CannyError::ShapeMismatch {
                    expected: (rows.len(), cols),
                    actual: (y, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Convert an 8-bit grayscale buffer to intensities in `[0, 255]`.
    pub fn from_u8(gray: &ImageU8<'_>) -> Self {
        let mut out = Grid::new(gray.h, gray.w);
        for (y, src) in gray.row_iter().enumerate() {
            let dst = out.row_mut(y);
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s as f32;
            }
        }
        out
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of cells holding a non-zero value.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Fail with `ShapeMismatch` unless `other` has this grid's shape.
    pub fn ensure_same_shape(&self, other: (usize, usize)) -> Result<(), CannyError> {
        if self.shape() != other {
            return Err(CannyError::ShapeMismatch {
                expected: self.shape(),
                actual: other,
            });
        }
        Ok(())
    }

    /// Allocate a `rows × cols` grid and fill each row in parallel.
    ///
    /// `fill(y, row)` receives the row index and the zeroed output row.
    pub(crate) fn par_from_rows<F>(rows: usize, cols: usize, fill: F) -> Self
    where
        F: Fn(usize, &mut [f32]) + Sync + Send,
    {
        let mut out = Grid::new(rows, cols);
        if out.is_empty() {
            return out;
        }
        out.data
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| fill(y, row));
        out
    }
}

impl ImageView for Grid {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.cols
    }
    #[inline]
    fn height(&self) -> usize {
        self.rows
    }
    #[inline]
    fn stride(&self) -> usize {
        self.cols
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.cols;
        &self.data[start..start + self.cols]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        Some(&self.data)
    }
}

impl ImageViewMut for Grid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.cols;
        let end = start + self.cols;
        &mut self.data[start..end]
    }
}

/// Clamp a signed index into `[0, upper)`. `upper == 0` yields 0.
#[inline]
pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 || idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
