mod common;

use canny_edges::image::ImageU8;
use canny_edges::stages::{
    build_gaussian_kernel, classify, convolve, gradient, quantize, suppress, Direction,
    QuantizedDirection,
};
use canny_edges::{detect_edges, CannyDetector, CannyParams, Grid};
use common::synthetic_image::{checkerboard_u8, noise, vertical_step};

fn is_border(y: usize, x: usize, (rows, cols): (usize, usize)) -> bool {
    y == 0 || x == 0 || y + 1 == rows || x + 1 == cols
}

#[test]
fn checkerboard_edges_follow_cell_boundaries() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height, cell) = (64usize, 48usize, 8usize);
    let buffer = checkerboard_u8(width, height, cell);
    let image = Grid::from_u8(&ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &buffer,
    });

    let mask = detect_edges(&image, 20.0, 50.0, 5, 1.0).unwrap();
    assert_eq!(mask.shape(), (height, width));

    // Cell centers are flat; pixels beside a vertical boundary are edges.
    for cy in 1..height / cell - 1 {
        for cx in 1..width / cell - 1 {
            let (y, x) = (cy * cell + cell / 2, cx * cell + cell / 2);
            assert_eq!(mask.get(y, x), 0.0, "cell center ({y},{x})");
            let boundary = cx * cell;
            assert_eq!(mask.get(y, boundary - 1), 1.0);
            assert_eq!(mask.get(y, boundary), 1.0);
        }
    }
}

#[test]
fn vertical_step_produces_a_band_around_the_step() {
    let img = vertical_step(20, 20, 10, 0.0, 200.0);
    let mask = detect_edges(&img, 20.0, 50.0, 5, 1.0).unwrap();
    for y in 0..20 {
        for x in 0..20 {
            if mask.get(y, x) != 0.0 {
                assert!((7..=12).contains(&x), "unexpected edge at ({y},{x})");
                assert!(!is_border(y, x, mask.shape()));
            }
        }
    }
    for y in 1..19 {
        assert_eq!(mask.get(y, 9), 1.0);
        assert_eq!(mask.get(y, 10), 1.0);
    }
}

#[test]
fn detection_is_bit_identical_across_runs() {
    let img = noise(37, 29, 7);
    let a = detect_edges(&img, 30.0, 90.0, 5, 1.3).unwrap();
    let b = detect_edges(&img, 30.0, 90.0, 5, 1.3).unwrap();
    let bits = |g: &Grid| g.as_slice().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn every_stage_preserves_shape() {
    let kernel = build_gaussian_kernel(7, 2.0).unwrap();
    for shape in [(1, 1), (2, 9), (9, 2), (13, 7), (31, 40)] {
        let img = noise(shape.0, shape.1, 3);
        let blurred = convolve(&img, &kernel);
        let field = gradient(&blurred);
        let dirs = quantize(&field.direction);
        let thin = suppress(&field.magnitude, &dirs).unwrap();
        let mask = classify(&thin, 10.0, 40.0).unwrap();
        assert_eq!(blurred.shape(), shape);
        assert_eq!(field.magnitude.shape(), shape);
        assert_eq!(field.direction.shape(), shape);
        assert_eq!(dirs.shape(), shape);
        assert_eq!(thin.shape(), shape);
        assert_eq!(mask.shape(), shape);
    }
}

#[test]
fn gradient_angles_stay_in_range_on_noise() {
    let field = gradient(&noise(40, 33, 11));
    assert!(field
        .direction
        .as_slice()
        .iter()
        .all(|&a| (0.0..180.0).contains(&a)));
}

#[test]
fn suppression_and_hysteresis_clear_the_border_ring() {
    let field = gradient(&noise(24, 18, 5));
    let dirs = quantize(&field.direction);
    let thin = suppress(&field.magnitude, &dirs).unwrap();
    let mask = classify(&thin, 0.0, 0.0).unwrap();
    for y in 0..24 {
        for x in 0..18 {
            if is_border(y, x, (24, 18)) {
                assert_eq!(thin.get(y, x), 0.0);
                assert_eq!(mask.get(y, x), 0.0);
            }
        }
    }
    // With both thresholds at zero every interior pixel is strong.
    assert_eq!(mask.count_nonzero(), 22 * 16);
}

#[test]
fn flat_magnitude_field_is_kept_in_full() {
    let mag = Grid::filled(9, 9, 4.5);
    let dirs = quantize(&Grid::filled(9, 9, 30.0));
    assert_eq!(dirs.get(4, 4), Direction::Deg45);
    let thin = suppress(&mag, &dirs).unwrap();
    assert_eq!(thin.count_nonzero(), 7 * 7);
}

#[test]
fn suppression_rejects_mismatched_direction_grid() {
    let mag = Grid::new(6, 6);
    let dirs = QuantizedDirection::filled(6, 5, Direction::Deg0);
    assert!(suppress(&mag, &dirs).is_err());
}

#[test]
fn edge_count_is_monotone_in_both_thresholds() {
    let field = gradient(&convolve(
        &noise(48, 48, 21),
        &build_gaussian_kernel(3, 1.0).unwrap(),
    ));
    let thin = suppress(&field.magnitude, &quantize(&field.direction)).unwrap();

    let mut prev = usize::MAX;
    for high in [60.0, 90.0, 120.0, 180.0, 250.0, 400.0] {
        let n = classify(&thin, 50.0, high).unwrap().count_nonzero();
        assert!(n <= prev);
        prev = n;
    }
    let mut prev = usize::MAX;
    for low in [0.0, 20.0, 50.0, 100.0, 150.0] {
        let n = classify(&thin, low, 150.0).unwrap().count_nonzero();
        assert!(n <= prev);
        prev = n;
    }
}

#[test]
fn weak_chain_is_promoted_one_hop_only() {
    let mut thin = Grid::new(11, 11);
    thin.set(5, 5, 100.0);
    for x in 6..=8 {
        thin.set(5, x, 10.01);
    }
    let mask = classify(&thin, 10.0, 50.0).unwrap();
    assert_eq!(mask.get(5, 5), 1.0);
    assert_eq!(mask.get(5, 6), 1.0);
    assert_eq!(mask.get(5, 7), 0.0);
    assert_eq!(mask.get(5, 8), 0.0);
}

#[test]
fn detector_trace_matches_free_function() {
    let img = noise(30, 30, 99);
    let params = CannyParams::new(25.0, 75.0, 3, 0.8);
    let trace = CannyDetector::new(params).unwrap().detect(&img).unwrap();
    let mask = detect_edges(&img, 25.0, 75.0, 3, 0.8).unwrap();
    assert_eq!(trace.edges, mask);
    assert!(trace.timing.total_ms >= 0.0);
}
