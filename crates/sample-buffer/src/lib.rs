//! Bounded Sample History
//!
//! Keeps the trailing window of samples a consumer needs and evicts the
//! oldest one on overflow, so history never grows without bound.

mod buffer;

pub use buffer::{BufferError, Iter, SampleBuffer};
pub use signal_source::Sample;
