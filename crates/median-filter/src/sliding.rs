//! Incremental sliding-window median

use crate::{validate_window_size, FilterError};
use std::collections::VecDeque;
use tracing::debug;

/// Sliding window median filter for noise reduction
///
/// Holds the trailing `window_size` samples twice: once in arrival order (to
/// know what to evict) and once sorted (to read the median). Each push costs
/// two binary searches plus one shift of the sorted copy.
#[derive(Debug, Clone)]
pub struct SlidingMedian {
    arrivals: VecDeque<f64>,
    sorted: Vec<f64>,
    window_size: usize,
}

impl SlidingMedian {
    /// Create a new median filter with given window size
    pub fn new(window_size: usize) -> Result<Self, FilterError> {
        let window_size = validate_window_size(window_size)?;
        debug!("Sliding median filter with window of {}", window_size);
        Ok(Self {
            arrivals: VecDeque::with_capacity(window_size),
            sorted: Vec::with_capacity(window_size),
            window_size,
        })
    }

    /// Add a value and get the filtered output
    ///
    /// Values are ordered with [`f64::total_cmp`]; use [`Self::try_push`] when
    /// the input may contain NaN or infinities.
    pub fn push(&mut self, value: f64) -> f64 {
        if self.arrivals.len() == self.window_size {
            if let Some(oldest) = self.arrivals.pop_front() {
                if let Ok(pos) = self.sorted.binary_search_by(|x| x.total_cmp(&oldest)) {
                    self.sorted.remove(pos);
                }
            }
        }

        self.arrivals.push_back(value);
        let pos = self.sorted.partition_point(|x| x.total_cmp(&value).is_le());
        self.sorted.insert(pos, value);

        self.sorted[self.sorted.len() / 2]
    }

    /// Like [`Self::push`], but refuses non-finite values and leaves the
    /// window untouched when it does
    pub fn try_push(&mut self, value: f64) -> Result<f64, FilterError> {
        if !value.is_finite() {
            return Err(FilterError::NonFiniteSample(value));
        }
        Ok(self.push(value))
    }

    /// Current upper median, `None` before the first sample
    pub fn median(&self) -> Option<f64> {
        self.sorted.get(self.sorted.len() / 2).copied()
    }

    /// Samples currently in the window
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Check if no sample has been pushed since creation or reset
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Check if the window holds `window_size` samples
    pub fn is_full(&self) -> bool {
        self.arrivals.len() == self.window_size
    }

    /// Configured window size `k`
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Window contents, oldest first
    pub fn window(&self) -> impl Iterator<Item = f64> + '_ {
        self.arrivals.iter().copied()
    }

    /// Reset the filter
    pub fn reset(&mut self) {
        self.arrivals.clear();
        self.sorted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::median_filter;
    use proptest::prelude::*;

    #[test]
    fn test_worked_example() {
        let mut filter = SlidingMedian::new(3).unwrap();
        let out: Vec<f64> = [5.0, 1.0, 3.0, 2.0, 4.0]
            .into_iter()
            .map(|v| filter.push(v))
            .collect();
        assert_eq!(out, vec![5.0, 5.0, 3.0, 2.0, 3.0]);
    }

    #[test]
    fn test_median_filter_removes_spike() {
        let mut filter = SlidingMedian::new(5).unwrap();

        // Normal values with one spike
        for val in [10.0, 11.0, 10.0, 100.0, 10.0] {
            filter.push(val);
        }

        let result = filter.push(11.0);
        // Window [11, 10, 100, 10, 11] -> sorted [10, 10, 11, 11, 100]
        assert_eq!(result, 11.0);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut filter = SlidingMedian::new(4).unwrap();
        for i in 0..10 {
            filter.push(i as f64);
            assert_eq!(filter.len(), (i + 1).min(4));
        }
        assert!(filter.is_full());
        assert_eq!(filter.window().collect::<Vec<_>>(), vec![6.0, 7.0, 8.0, 9.0]);
        // Even window -> upper middle of [6, 7, 8, 9]
        assert_eq!(filter.median(), Some(8.0));
    }

    #[test]
    fn test_duplicates_evicted_one_at_a_time() {
        let mut filter = SlidingMedian::new(3).unwrap();
        for v in [1.0, 1.0, 1.0, 9.0, 9.0] {
            filter.push(v);
        }
        // Window [1, 9, 9]
        assert_eq!(filter.median(), Some(9.0));
        assert_eq!(filter.push(1.0), 9.0); // [9, 9, 1]
        assert_eq!(filter.push(1.0), 1.0); // [9, 1, 1]
    }

    #[test]
    fn test_try_push_rejects_non_finite() {
        let mut filter = SlidingMedian::new(3).unwrap();
        filter.push(2.0);
        assert!(matches!(
            filter.try_push(f64::NAN),
            Err(FilterError::NonFiniteSample(_))
        ));
        assert_eq!(
            filter.try_push(f64::INFINITY),
            Err(FilterError::NonFiniteSample(f64::INFINITY))
        );
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.try_push(4.0), Ok(4.0));
    }

    #[test]
    fn test_reset() {
        let mut filter = SlidingMedian::new(3).unwrap();
        filter.push(1.0);
        filter.push(2.0);
        filter.reset();
        assert!(filter.is_empty());
        assert_eq!(filter.median(), None);
        assert_eq!(filter.push(7.0), 7.0);
    }

    #[test]
    fn test_rejects_zero_window() {
        assert_eq!(
            SlidingMedian::new(0).unwrap_err(),
            FilterError::InvalidWindowSize(0)
        );
    }

    proptest! {
        #[test]
        fn matches_reference(
            values in proptest::collection::vec(-1.0e6f64..1.0e6, 0..200),
            window_size in 1usize..32,
        ) {
            let expected = median_filter(&values, window_size).unwrap();
            let mut filter = SlidingMedian::new(window_size).unwrap();
            let actual: Vec<f64> = values.iter().map(|&v| filter.push(v)).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn matches_reference_with_ties(
            values in proptest::collection::vec(0u8..4, 0..120),
            window_size in 1usize..12,
        ) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let expected = median_filter(&values, window_size).unwrap();
            let mut filter = SlidingMedian::new(window_size).unwrap();
            let actual: Vec<f64> = values.iter().map(|&v| filter.push(v)).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn odd_window_is_exact_median(values in proptest::collection::vec(-50.0f64..50.0, 1..40)) {
            let mut values = values;
            if values.len() % 2 == 0 {
                values.pop();
            }
            let mut filter = SlidingMedian::new(values.len()).unwrap();
            let mut last = 0.0;
            for &v in &values {
                last = filter.push(v);
            }
            let below = values.iter().filter(|&&v| v < last).count();
            let above = values.iter().filter(|&&v| v > last).count();
            prop_assert!(below <= values.len() / 2);
            prop_assert!(above <= values.len() / 2);
        }
    }
}
