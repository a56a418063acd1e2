//! Detector pipeline driving Canny edge detection end-to-end.
//!
//! [`CannyDetector`] validates its parameters once, then turns any number of
//! grayscale grids into binary edge masks. Each stage borrows the previous
//! stage's grid and allocates its own output; nothing is shared between runs.
//!
//! Typical usage:
//! ```no_run
//! use canny_edges::{CannyDetector, CannyParams};
//! use canny_edges::image::Grid;
//!
//! # fn example(gray: &Grid) -> Result<(), canny_edges::CannyError> {
//! let detector = CannyDetector::new(CannyParams::new(20.0, 50.0, 5, 1.0))?;
//! let trace = detector.detect(gray)?;
//! println!("edges: {}", trace.edges.count_nonzero());
//! # Ok(())
//! # }
//! ```
use super::params::CannyParams;
use crate::diagnostics::TimingBreakdown;
use crate::edges::kernel::{build_gaussian_kernel, Kernel};
use crate::edges::{
    classify_with, convolve, gradient_with_operator, quantize, suppress, GradientField,
    QuantizedDirection, Thresholds,
};
use crate::error::CannyError;
use crate::image::Grid;
use log::debug;
use std::time::Instant;

/// Every intermediate grid of one run plus per-stage timings.
#[derive(Clone, Debug)]
pub struct CannyTrace {
    pub blurred: Grid,
    pub gradient: GradientField,
    pub directions: QuantizedDirection,
    pub suppressed: Grid,
    /// Binary mask: 1.0 for edge pixels, 0.0 elsewhere.
    pub edges: Grid,
    pub timing: TimingBreakdown,
}

/// Canny detector with a prebuilt smoothing kernel.
#[derive(Clone, Debug)]
pub struct CannyDetector {
    params: CannyParams,
    smoothing: Kernel,
    thresholds: Thresholds,
}

impl CannyDetector {
    /// Validate `params` and build the smoothing kernel.
    pub fn new(params: CannyParams) -> Result<Self, CannyError> {
        let smoothing = build_gaussian_kernel(params.kernel_size, params.spread)?;
        let thresholds = params.thresholds()?;
        Ok(Self {
            params,
            smoothing,
            thresholds,
        })
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Run the full pipeline and return the edge mask only.
    pub fn detect_mask(&self, image: &Grid) -> Result<Grid, CannyError> {
        Ok(self.detect(image)?.edges)
    }

    /// Run the full pipeline, keeping every intermediate grid.
    pub fn detect(&self, image: &Grid) -> Result<CannyTrace, CannyError> {
        let (rows, cols) = image.shape();
        debug!(
            "CannyDetector::detect start rows={} cols={} kernel={} spread={} low={} high={}",
            rows,
            cols,
            self.params.kernel_size,
            self.params.spread,
            self.thresholds.low(),
            self.thresholds.high()
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let stage_start = Instant::now();
        let blurred = convolve(image, &self.smoothing);
        timing.push("blur", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let gradient = gradient_with_operator(&blurred, self.params.operator);
        timing.push("gradient", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let directions = quantize(&gradient.direction);
        timing.push("quantize", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let suppressed = suppress(&gradient.magnitude, &directions)?;
        timing.push("suppress", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let edges = classify_with(&suppressed, self.thresholds, self.params.propagation)?;
        timing.push("hysteresis", elapsed_ms(stage_start));

        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "CannyDetector::detect done kept={} edges={} total_ms={:.3}",
            suppressed.count_nonzero(),
            edges.count_nonzero(),
            timing.total_ms
        );

        Ok(CannyTrace {
            blurred,
            gradient,
            directions,
            suppressed,
            edges,
            timing,
        })
    }
}

/// Detect edges in a grayscale grid with the given thresholds and blur.
///
/// All parameters are validated before any pixel is touched. The result has
/// the input's shape and holds 1.0 for edges and 0.0 elsewhere. Use
/// [`super::params::DEFAULT_SPREAD`] when no particular spread is wanted.
pub fn detect_edges(
    image: &Grid,
    low_threshold: f32,
    high_threshold: f32,
    kernel_size: usize,
    spread: f32,
) -> Result<Grid, CannyError> {
    let params = CannyParams::new(low_threshold, high_threshold, kernel_size, spread);
    CannyDetector::new(params)?.detect_mask(image)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
