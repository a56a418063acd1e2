use canny_edges::Grid;
use rand::prelude::*;

/// Generates a simple high-contrast checkerboard image.
#[allow(dead_code)]
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Dark left half, bright right half starting at column `at`.
#[allow(dead_code)]
pub fn vertical_step(rows: usize, cols: usize, at: usize, lo: f32, hi: f32) -> Grid {
    let data = (0..rows * cols)
        .map(|i| if i % cols >= at { hi } else { lo })
        .collect();
    Grid::from_vec(rows, cols, data).expect("buffer matches shape")
}

/// Seeded uniform texture with integer intensities in `[0, 255]`.
#[allow(dead_code)]
pub fn noise(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| rng.gen_range(0..=255u8) as f32)
        .collect();
    Grid::from_vec(rows, cols, data).expect("buffer matches shape")
}
