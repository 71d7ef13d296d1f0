//! Sliding-Window Median Filter
//!
//! Each output is the median of the trailing `k` inputs (fewer while the
//! window is still filling). Even-length windows resolve to the
//! **upper-middle** element, index `n / 2` of the ascending sort, never the
//! average of the two central values.
//!
//! [`median_filter`] is the sort-per-step reference. [`SlidingMedian`] keeps
//! a sorted window between steps and produces identical output.

mod error;
mod reference;
mod series;
mod sliding;

pub use error::FilterError;
pub use reference::{median_filter, upper_median};
pub use series::FilteredSeries;
pub use sliding::SlidingMedian;

/// Window size used when nothing else is configured
pub const DEFAULT_WINDOW_SIZE: usize = 20;

/// Check a window size, rejecting `0`
pub fn validate_window_size(window_size: usize) -> Result<usize, FilterError> {
    if window_size == 0 {
        Err(FilterError::InvalidWindowSize(window_size))
    } else {
        Ok(window_size)
    }
}
