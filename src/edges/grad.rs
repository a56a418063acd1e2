//! Image gradients (Sobel/Scharr) with magnitude and undirected angle.
//!
//! - Convolves the horizontal kernel and its transpose with border clamping.
//! - Outputs per-pixel `dx`, `dy`, `magnitude = sqrt(dx^2 + dy^2)`.
//! - Direction is `atan2(dy, dx)` in degrees folded into `[0, 180)`: a
//!   gradient and its 180°-rotated twin describe the same edge orientation.
//!
//! Complexity: O(W·H) per derivative; memory: four float buffers.
use super::convolve::convolve;
use super::kernel::{Kernel, SCHARR_X, SOBEL_X};
use crate::image::{Grid, ImageView};
use serde::{Deserialize, Serialize};

/// Derivative operator used for `dx` (and, transposed, `dy`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientOperator {
    #[default]
    Sobel,
    Scharr,
}

impl GradientOperator {
    /// Horizontal derivative kernel.
    pub fn kernel_x(self) -> Kernel {
        match self {
            GradientOperator::Sobel => Kernel::from(SOBEL_X),
            GradientOperator::Scharr => Kernel::from(SCHARR_X),
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal derivative (convolution with the X kernel)
    pub dx: Grid,
    /// Vertical derivative (convolution with the transposed X kernel)
    pub dy: Grid,
    /// Euclidean magnitude per pixel, never negative
    pub magnitude: Grid,
    /// Undirected gradient angle in degrees, range `[0, 180)`
    pub direction: Grid,
}

impl GradientField {
    pub fn shape(&self) -> (usize, usize) {
        self.magnitude.shape()
    }
}

/// Fold `atan2` output (degrees, `[-180, 180]`) into `[0, 180)`.
#[inline]
pub fn undirected_degrees(dy: f32, dx: f32) -> f32 {
    let mut theta = dy.atan2(dx);
    if theta < 0.0 {
        theta += std::f32::consts::PI;
    }
    let deg = theta.to_degrees();
    if deg >= 180.0 {
        0.0
    } else {
        // Collapse -0.0 so every stored angle compares cleanly against 0.
        deg + 0.0
    }
}

/// Sobel gradients of a single-channel grid.
pub fn gradient(grid: &Grid) -> GradientField {
    gradient_with_operator(grid, GradientOperator::Sobel)
}

pub fn gradient_with_operator(grid: &Grid, operator: GradientOperator) -> GradientField {
    let kernel_x = operator.kernel_x();
    let kernel_y = kernel_x.transpose();
    let dx = convolve(grid, &kernel_x);
    let dy = convolve(grid, &kernel_y);

    let (rows, cols) = grid.shape();
    let magnitude = Grid::par_from_rows(rows, cols, |y, out| {
        for ((m, &gx), &gy) in out.iter_mut().zip(dx.row(y)).zip(dy.row(y)) {
            *m = (gx * gx + gy * gy).sqrt();
        }
    });
    let direction = Grid::par_from_rows(rows, cols, |y, out| {
        for ((a, &gx), &gy) in out.iter_mut().zip(dx.row(y)).zip(dy.row(y)) {
            *a = undirected_degrees(gy, gx);
        }
    });

    GradientField {
        dx,
        dy,
        magnitude,
        direction,
    }
}
