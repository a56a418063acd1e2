//! Parameter types configuring the Canny stages.
//!
//! Defaults suit 8-bit intensities (0–255) with a light 5×5 blur. Thresholds
//! apply to the Sobel magnitude, which for a clean step of height `h` peaks
//! near `4h` before blurring.

use crate::edges::kernel::build_gaussian_kernel;
use crate::edges::{GradientOperator, Propagation, Thresholds};
use crate::error::CannyError;
use serde::{Deserialize, Serialize};

/// Spread used when the caller does not pick one.
pub const DEFAULT_SPREAD: f32 = 1.0;

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Magnitudes at or above this value can become edges through a strong neighbor.
    pub low_threshold: f32,
    /// Magnitudes at or above this value are always edges (away from the border).
    pub high_threshold: f32,
    /// Side of the square Gaussian kernel; odd and positive.
    pub kernel_size: usize,
    /// Gaussian spread over the `[-1, 1]` sampling interval.
    pub spread: f32,
    /// Derivative kernel pair.
    pub operator: GradientOperator,
    /// Weak-pixel promotion rule.
    pub propagation: Propagation,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 20.0,
            high_threshold: 50.0,
            kernel_size: 5,
            spread: DEFAULT_SPREAD,
            operator: GradientOperator::Sobel,
            propagation: Propagation::OneHop,
        }
    }
}

impl CannyParams {
    pub fn new(low_threshold: f32, high_threshold: f32, kernel_size: usize, spread: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
            kernel_size,
            spread,
            ..Self::default()
        }
    }

    pub fn with_operator(mut self, operator: GradientOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    pub fn thresholds(&self) -> Result<Thresholds, CannyError> {
        Thresholds::new(self.low_threshold, self.high_threshold)
    }

    /// Check every precondition the pipeline enforces, without running it.
    pub fn validate(&self) -> Result<(), CannyError> {
        build_gaussian_kernel(self.kernel_size, self.spread)?;
        self.thresholds()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CannyParams::default().validate().is_ok());
    }

    #[test]
    fn validate_aggregates_stage_checks() {
        for params in [
            CannyParams::new(10.0, 20.0, 4, 1.0),
            CannyParams::new(10.0, 20.0, 0, 1.0),
            CannyParams::new(10.0, 20.0, 3, 0.0),
            CannyParams::new(-1.0, 20.0, 3, 1.0),
            CannyParams::new(30.0, 20.0, 3, 1.0),
        ] {
            assert!(
                matches!(params.validate(), Err(CannyError::InvalidParameter(_))),
                "{params:?}"
            );
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: CannyParams =
            serde_json::from_str(r#"{ "high_threshold": 80, "propagation": "connected" }"#)
                .unwrap();
        assert_eq!(params.high_threshold, 80.0);
        assert_eq!(params.low_threshold, 20.0);
        assert_eq!(params.kernel_size, 5);
        assert_eq!(params.propagation, Propagation::Connected);
        assert_eq!(params.operator, GradientOperator::Sobel);
    }

    #[test]
    fn negative_kernel_size_is_rejected_at_parse_time() {
        let parsed: Result<CannyParams, _> = serde_json::from_str(r#"{ "kernel_size": -1 }"#);
        assert!(parsed.is_err());
    }
}
