//! Ring Buffer Implementation

use signal_source::Sample;
use thiserror::Error;

/// Errors when constructing a [`SampleBuffer`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A zero-capacity buffer can't hold the latest sample
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,
}

/// Fixed-capacity ring of samples, oldest evicted first
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Pre-allocated storage
    storage: Box<[Sample]>,
    /// Index of the slot the next push writes to
    head: usize,
    /// Number of live samples
    len: usize,
    /// Total samples pushed (for statistics)
    total_written: u64,
}

impl SampleBuffer {
    /// Create a buffer holding at most `capacity` samples
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: vec![Sample::default(); capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            total_written: 0,
        })
    }

    /// Append a sample, overwriting the oldest one when full
    pub fn push(&mut self, sample: Sample) {
        self.storage[self.head] = sample;
        self.head = (self.head + 1) % self.capacity();
        self.len = (self.len + 1).min(self.capacity());
        self.total_written += 1;
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the next push will evict a sample
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Total samples ever pushed, evicted ones included
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Most recently pushed sample
    pub fn latest(&self) -> Option<&Sample> {
        if self.is_empty() {
            return None;
        }
        Some(&self.storage[self.slot(self.len - 1)])
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len,
        }
    }

    /// Read the last N samples (most recent first)
    pub fn read_last(&self, count: usize) -> Vec<Sample> {
        self.iter().rev().take(count).copied().collect()
    }

    /// Smallest and largest value currently held
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.iter().map(|s| s.value).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Drop every held sample; `total_written` is kept
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Storage slot of the `index`-th oldest live sample
    fn slot(&self, index: usize) -> usize {
        let capacity = self.capacity();
        (self.head + capacity - self.len + index) % capacity
    }
}

/// Oldest-to-newest iterator over a [`SampleBuffer`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buffer: &'a SampleBuffer,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let sample = &self.buffer.storage[self.buffer.slot(self.front)];
        self.front += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.buffer.storage[self.buffer.slot(self.back)])
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SampleBuffer {
    type Item = &'a Sample;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
