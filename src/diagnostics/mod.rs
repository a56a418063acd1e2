//! Diagnostics data model exposed by the detector and the CLI.
//!
//! `TimingBreakdown` is filled by every [`crate::CannyDetector::detect`] run;
//! `EdgeReport` condenses a run into a JSON-friendly summary.

pub mod pipeline;
pub mod timing;

pub use pipeline::{EdgeReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
