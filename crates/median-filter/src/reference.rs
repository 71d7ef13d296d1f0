//! Sort-based reference filter

use crate::{validate_window_size, FilterError};

/// Upper median of an unsorted window: element `len / 2` once sorted ascending
pub fn upper_median(window: &[f64]) -> Result<f64, FilterError> {
    if window.is_empty() {
        return Err(FilterError::EmptyWindow);
    }
    let mut sorted = window.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted[sorted.len() / 2])
}

/// Filter a whole history, recomputing every window from scratch
///
/// Entry `i` of the result is the upper median of
/// `history[i.saturating_sub(k - 1)..=i]`, so the output always has the same
/// length as `history`. Costs O(n * k log k).
pub fn median_filter(history: &[f64], window_size: usize) -> Result<Vec<f64>, FilterError> {
    let k = validate_window_size(window_size)?;
    history
        .iter()
        .enumerate()
        .map(|(i, _)| upper_median(&history[(i + 1).saturating_sub(k)..=i]))
        .collect()
}
