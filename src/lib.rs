#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage-level building blocks and tooling support.
pub mod config;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_edges, CannyDetector, CannyParams, CannyTrace, DEFAULT_SPREAD};
pub use crate::error::CannyError;
pub use crate::image::Grid;

// Run summaries for tooling.
pub use crate::diagnostics::{EdgeReport, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_edges::prelude::*;
///
/// # fn main() -> Result<(), CannyError> {
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![0u8; w * h];
/// let img = Grid::from_u8(&ImageU8 { w, h, stride: w, data: &gray });
///
/// let mask = detect_edges(&img, 20.0, 50.0, 5, 1.0)?;
/// println!("edges={}", mask.count_nonzero());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{detect_edges, CannyDetector, CannyError, CannyParams, Grid};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::edges::{
        build_gaussian_kernel, classify, classify_with, convolve, gradient,
        gradient_with_operator, quantize, suppress, Direction, GradientField, GradientOperator,
        Kernel, PixelClass, Propagation, QuantizedDirection, Thresholds,
    };
}
