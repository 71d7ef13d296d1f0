//! Raw and filtered sequences kept side by side

use crate::{FilterError, SlidingMedian};

/// Runs a [`SlidingMedian`] over a whole series and keeps both the raw and
/// the filtered values, one filtered entry per raw entry
///
/// Unbounded: meant for offline batches and tests. Live loops should keep
/// their history in a bounded buffer instead.
#[derive(Debug, Clone)]
pub struct FilteredSeries {
    filter: SlidingMedian,
    raw: Vec<f64>,
    filtered: Vec<f64>,
}

impl FilteredSeries {
    /// Create an empty series with window size `window_size`
    pub fn new(window_size: usize) -> Result<Self, FilterError> {
        Ok(Self {
            filter: SlidingMedian::new(window_size)?,
            raw: Vec::new(),
            filtered: Vec::new(),
        })
    }

    /// Filter every value of `values` in order
    pub fn from_values<I>(values: I, window_size: usize) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut series = Self::new(window_size)?;
        series.extend(values);
        Ok(series)
    }

    /// Append one raw value and return its filtered counterpart
    pub fn push(&mut self, value: f64) -> f64 {
        let median = self.filter.push(value);
        self.raw.push(value);
        self.filtered.push(median);
        median
    }

    /// Raw values in arrival order
    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    /// Filtered values, index-aligned with [`Self::raw`]
    pub fn filtered(&self) -> &[f64] {
        &self.filtered
    }

    /// Number of steps seen
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if no value has been pushed
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Extend<f64> for FilteredSeries {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::median_filter;

    #[test]
    fn test_lengths_stay_aligned() {
        let mut series = FilteredSeries::new(4).unwrap();
        for i in 0..25 {
            series.push((i as f64 * 0.7).sin());
            assert_eq!(series.raw().len(), series.filtered().len());
            assert_eq!(series.len(), i + 1);
        }
    }

    #[test]
    fn test_matches_reference() {
        let values: Vec<f64> = (0..100).map(|i| ((i * 37) % 11) as f64).collect();
        let series = FilteredSeries::from_values(values.iter().copied(), 6).unwrap();
        assert_eq!(series.filtered(), &median_filter(&values, 6).unwrap()[..]);
        assert_eq!(series.raw(), &values[..]);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = vec![4.0, -1.0, 8.5, 0.0];
        let series = FilteredSeries::from_values(values.clone(), 1).unwrap();
        assert_eq!(series.filtered(), &values[..]);
    }

    #[test]
    fn test_empty() {
        let series = FilteredSeries::new(3).unwrap();
        assert!(series.is_empty());
        assert!(FilteredSeries::new(0).is_err());
    }
}
