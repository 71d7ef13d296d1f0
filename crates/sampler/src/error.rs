//! Sampler Error Types

use median_filter::FilterError;
use sample_buffer::BufferError;
use signal_source::SignalError;
use thiserror::Error;

/// Errors raised by a [`crate::FrameSink`]
#[derive(Debug, Error)]
pub enum SinkError {
    /// Output device failed
    #[error("render I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink can no longer accept frames
    #[error("sink closed: {0}")]
    Closed(String),
}

/// Errors that stop the sampler
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Bad window size
    #[error("invalid filter configuration: {0}")]
    Filter(#[from] FilterError),

    /// Bad trail length
    #[error("invalid trail configuration: {0}")]
    Buffer(#[from] BufferError),

    /// Bad time step
    #[error("invalid signal configuration: {0}")]
    Signal(#[from] SignalError),

    /// Trail can't reach across the visible x-axis
    #[error("trail of {trail_len} samples is shorter than the {needed} needed to span the x-axis")]
    TrailTooShort { trail_len: usize, needed: usize },

    /// Trail would exceed [`crate::MAX_TRAIL_LEN`]
    #[error("trail of {0} samples exceeds the limit")]
    TrailTooLong(usize),

    /// Visible x-axis span must be finite and positive
    #[error("x-axis span {0} must be finite and > 0")]
    InvalidSpan(f64),

    /// The sink rejected a frame
    #[error("frame sink failed: {0}")]
    Sink(#[from] SinkError),
}
