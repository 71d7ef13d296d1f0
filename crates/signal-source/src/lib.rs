//! Synthetic Signal Sources
//!
//! Produces one [`Sample`] per time step from a deterministic waveform or a
//! seeded jitter generator standing in for a real sensor link.

mod clock;
mod error;
mod jitter;
mod kind;
mod waveform;

pub use clock::SignalState;
pub use error::SignalError;
pub use jitter::JitterSignal;
pub use kind::SignalKind;
pub use waveform::TrigSignal;

use serde::{Deserialize, Serialize};

/// A single reading taken at time `t`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time cursor value the sample was drawn at
    pub t: f64,
    /// Measured (or simulated) amplitude
    pub value: f64,
}

impl Sample {
    /// Create a sample
    pub fn new(t: f64, value: f64) -> Self {
        Self { t, value }
    }
}

/// Anything that yields one sample per time step
pub trait SignalSource {
    /// Produce the sample for time `t`
    fn next(&mut self, t: f64) -> Sample;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn next(&mut self, t: f64) -> Sample {
        (**self).next(t)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
