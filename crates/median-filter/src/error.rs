//! Filter Error Types

use thiserror::Error;

/// Errors raised by the median filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Window must hold at least one sample
    #[error("window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    /// Median requested over no samples
    #[error("median of an empty window is undefined")]
    EmptyWindow,

    /// NaN or infinity offered to the filter
    #[error("sample {0} is not finite")]
    NonFiniteSample(f64),
}
