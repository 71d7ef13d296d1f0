//! Time cursor driving the signal sources

use crate::error::SignalError;
use serde::{Deserialize, Serialize};

/// Default step between consecutive samples
pub const DEFAULT_STEP: f64 = 0.1;

/// Explicit time cursor: starts at zero and moves forward by `dt` per step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalState {
    t: f64,
    dt: f64,
    steps: u64,
}

impl SignalState {
    /// Create a cursor at `t = 0` stepping by `dt`
    pub fn new(dt: f64) -> Result<Self, SignalError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SignalError::InvalidStep(dt));
        }
        Ok(Self { t: 0.0, dt, steps: 0 })
    }

    /// Return the current time and move the cursor one step forward
    pub fn advance(&mut self) -> f64 {
        let now = self.t;
        self.steps += 1;
        // Multiply rather than accumulate so long runs don't drift.
        self.t = self.steps as f64 * self.dt;
        now
    }

    /// Time the next call to [`Self::advance`] will return
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Step size
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps taken so far
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self {
            t: 0.0,
            dt: DEFAULT_STEP,
            steps: 0,
        }
    }
}
