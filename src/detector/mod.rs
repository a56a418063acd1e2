//! Canny detector orchestrating the edge stages.
//!
//! Overview
//! - Blurs the input with a normalized Gaussian (clamp-to-edge borders).
//! - Computes Sobel (or Scharr) derivatives, magnitude and undirected angle.
//! - Quantizes angles to four orientations and thins the magnitude with
//!   non-maximum suppression.
//! - Classifies the survivors with double-threshold hysteresis.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`CannyDetector`] implementation and [`detect_edges`].

pub mod params;
mod pipeline;

pub use params::{CannyParams, DEFAULT_SPREAD};
pub use pipeline::{detect_edges, CannyDetector, CannyTrace};
