//! Edge stages: kernels, convolution, gradients, direction quantization,
//! non-maximum suppression and hysteresis.
//!
//! Every stage is a pure function: it borrows its input grid(s) and returns a
//! freshly allocated grid of the same shape. Borders are handled uniformly:
//!
//! - Convolution clamps out-of-range reads to the nearest edge sample.
//! - Suppression and hysteresis leave the outermost 1-pixel ring at zero.
//!
//! Row-wise work runs on the `rayon` pool; results do not depend on the
//! number of threads.

pub mod convolve;
pub mod direction;
pub mod grad;
pub mod hysteresis;
pub mod kernel;
pub mod nms;

pub use convolve::convolve;
pub use direction::{quantize, Direction, QuantizedDirection};
pub use grad::{gradient, gradient_with_operator, GradientField, GradientOperator};
pub use hysteresis::{classify, classify_pixels, classify_with, PixelClass, Propagation, Thresholds};
pub use kernel::{build_gaussian_kernel, Kernel};
pub use nms::suppress;
