//! Dense 2D convolution with clamp-to-edge borders.
//!
//! Reads that fall outside the grid replicate the nearest border sample, so a
//! constant image stays constant under any normalized kernel and borders are
//! neither darkened (zero padding) nor mixed with the opposite side
//! (wrapping). The kernel is mirrored through its center (true convolution);
//! no normalization happens here.
//!
//! Rows are independent and are computed in parallel.
use super::kernel::Kernel;
use crate::image::grid::clamp_index;
use crate::image::{Grid, ImageView};

/// Convolve `grid` with `kernel`, returning a grid of the same shape.
pub fn convolve(grid: &Grid, kernel: &Kernel) -> Grid {
    let (rows, cols) = grid.shape();
    let size = kernel.size();
    let radius = kernel.radius() as isize;

    // Column lookups are identical for every row; precompute them once.
    let col_taps: Vec<Vec<usize>> = (0..cols)
        .map(|x| {
            (0..size)
                .map(|k| clamp_index(x as isize + radius - k as isize, cols))
                .collect()
        })
        .collect();

    Grid::par_from_rows(rows, cols, |y, out_row| {
        for ky in 0..size {
            let sy = clamp_index(y as isize + radius - ky as isize, rows);
            let src_row = grid.row(sy);
            for (out_px, taps) in out_row.iter_mut().zip(&col_taps) {
                let mut acc = 0.0f32;
                for (kx, &sx) in taps.iter().enumerate() {
                    acc += kernel.weight(ky, kx) * src_row[sx];
                }
                *out_px += acc;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::kernel::{build_gaussian_kernel, SOBEL_X};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn ramp(rows: usize, cols: usize) -> Grid {
        let data = (0..rows * cols).map(|i| (i % cols) as f32 * 10.0).collect();
        Grid::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn preserves_shape() {
        let k = build_gaussian_kernel(5, 1.0).unwrap();
        for (r, c) in [(1, 1), (2, 7), (9, 3), (0, 4)] {
            assert_eq!(convolve(&Grid::new(r, c), &k).shape(), (r, c));
        }
    }

    #[test]
    fn constant_image_is_unchanged_including_borders() {
        let g = Grid::filled(6, 5, 128.0);
        let k = build_gaussian_kernel(5, 1.0).unwrap();
        let out = convolve(&g, &k);
        assert!(out.as_slice().iter().all(|&v| approx_eq(v, 128.0)));
    }

    #[test]
    fn identity_kernel_copies_input() {
        let g = ramp(4, 4);
        let k = build_gaussian_kernel(1, 1.0).unwrap();
        assert_eq!(convolve(&g, &k), g);
    }

    #[test]
    fn kernel_is_mirrored() {
        // Single bright pixel reproduces the kernel itself (not its mirror).
        let mut g = Grid::new(5, 5);
        g.set(2, 2, 1.0);
        let k = Kernel::new(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        let out = convolve(&g, &k);
        assert_eq!(out.get(1, 1), 1.0);
        assert_eq!(out.get(1, 3), 3.0);
        assert_eq!(out.get(3, 1), 7.0);
        assert_eq!(out.get(2, 2), 5.0);
    }

    #[test]
    fn boundary_pixels_use_clamped_reads() {
        // Horizontal ramp: 0, 10, 20, 30. With replicated borders the left
        // column sees [0, 0, 10] and the right column sees [20, 30, 30].
        let g = ramp(3, 4);
        let out = convolve(&g, &Kernel::from(SOBEL_X));
        for y in 0..3 {
            assert!(approx_eq(out.get(y, 0), 4.0 * 10.0));
            assert!(approx_eq(out.get(y, 1), 4.0 * 20.0));
            assert!(approx_eq(out.get(y, 3), 4.0 * 10.0));
        }
    }
}
