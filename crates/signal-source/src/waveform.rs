//! Two-Tone Sine Waveform

use crate::{Sample, SignalSource};
use serde::{Deserialize, Serialize};

/// Slow carrier with a small fast ripple on top:
/// `sin(base_freq * t) + ripple_gain * sin(ripple_freq * t)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrigSignal {
    /// Carrier angular frequency (rad per time unit)
    pub base_freq: f64,
    /// Ripple angular frequency (rad per time unit)
    pub ripple_freq: f64,
    /// Ripple amplitude relative to the unit carrier
    pub ripple_gain: f64,
}

impl Default for TrigSignal {
    fn default() -> Self {
        Self {
            base_freq: 8.0,
            ripple_freq: 400.0,
            ripple_gain: 0.1,
        }
    }
}

impl TrigSignal {
    /// Evaluate the waveform at `t`
    pub fn value_at(&self, t: f64) -> f64 {
        (self.base_freq * t).sin() + (self.ripple_freq * t).sin() * self.ripple_gain
    }
}

impl SignalSource for TrigSignal {
    fn next(&mut self, t: f64) -> Sample {
        Sample::new(t, self.value_at(t))
    }

    fn name(&self) -> &'static str {
        "trig"
    }
}
