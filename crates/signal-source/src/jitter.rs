//! Simulated serial-link reading: a fixed baseline plus integer jitter

use crate::{Sample, SignalSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Baseline reported by the simulated link
pub const DEFAULT_BASELINE: f64 = 20.0;

/// Jitter is drawn uniformly from `0..DEFAULT_SPREAD`
pub const DEFAULT_SPREAD: u32 = 5;

/// Seeded stand-in for a noisy device reading
#[derive(Debug, Clone)]
pub struct JitterSignal {
    baseline: f64,
    spread: u32,
    rng: StdRng,
}

impl JitterSignal {
    /// Create a jitter source with the default baseline and spread
    pub fn new(seed: u64) -> Self {
        Self::with_range(seed, DEFAULT_BASELINE, DEFAULT_SPREAD)
    }

    /// Create a jitter source around `baseline`, with jitter in `0..spread`
    ///
    /// A `spread` of zero yields the baseline every step.
    pub fn with_range(seed: u64, baseline: f64, spread: u32) -> Self {
        Self {
            baseline,
            spread,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SignalSource for JitterSignal {
    fn next(&mut self, t: f64) -> Sample {
        let jitter = if self.spread == 0 {
            0
        } else {
            self.rng.gen_range(0..self.spread)
        };
        Sample::new(t, self.baseline + f64::from(jitter))
    }

    fn name(&self) -> &'static str {
        "jitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range() {
        let mut signal = JitterSignal::new(7);
        for i in 0..500 {
            let sample = signal.next(i as f64 * 0.1);
            assert!(sample.value >= 20.0 && sample.value <= 24.0);
            assert_eq!(sample.value.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = JitterSignal::new(99);
        let mut b = JitterSignal::new(99);
        for i in 0..50 {
            let t = i as f64;
            assert_eq!(a.next(t), b.next(t));
        }
    }

    #[test]
    fn test_zero_spread_is_constant() {
        let mut signal = JitterSignal::with_range(1, 3.5, 0);
        for i in 0..10 {
            assert_eq!(signal.next(i as f64).value, 3.5);
        }
    }
}
