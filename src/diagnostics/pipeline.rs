use crate::detector::{CannyParams, CannyTrace};
use crate::diagnostics::TimingBreakdown;
use serde::Serialize;

/// Serializable summary of one detector run, written by the CLI.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub input: InputDescriptor,
    pub params: CannyParams,
    /// Pixels that survived non-maximum suppression.
    pub suppressed_count: usize,
    pub edge_count: usize,
    /// Edge pixels as a fraction of all pixels.
    pub edge_density: f64,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub rows: usize,
    pub cols: usize,
}

impl EdgeReport {
    pub fn from_trace(trace: &CannyTrace, params: &CannyParams) -> Self {
        let (rows, cols) = trace.edges.shape();
        let edge_count = trace.edges.count_nonzero();
        let pixels = rows * cols;
        Self {
            input: InputDescriptor { rows, cols },
            params: params.clone(),
            suppressed_count: trace.suppressed.count_nonzero(),
            edge_count,
            edge_density: if pixels > 0 {
                edge_count as f64 / pixels as f64
            } else {
                0.0
            },
            timings: trace.timing.clone(),
        }
    }
}
