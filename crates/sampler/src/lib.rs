//! Sampling Loop
//!
//! Steps a signal source on a fixed time grid, runs every sample through the
//! sliding median, and hands the trailing raw/filtered traces to a
//! [`FrameSink`] once per step. The loop is cooperative: it checks a
//! [`Shutdown`] token before every step and sleeps between steps only to pace
//! the display.

mod error;
mod frame;
mod sampler;
mod shutdown;

pub use error::{SamplerError, SinkError};
pub use frame::{Frame, FrameSink};
pub use sampler::{RunSummary, Sampler, SamplerConfig, MAX_TRAIL_LEN};
pub use shutdown::Shutdown;
