//! Source selection by name

use crate::{JitterSignal, SignalSource, TrigSignal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which synthetic source to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Two-tone sine waveform
    #[default]
    Trig,
    /// Seeded integer jitter around a fixed baseline
    Jitter,
}

impl SignalKind {
    /// Build the selected source; `seed` only affects random sources
    pub fn build(self, seed: u64) -> Box<dyn SignalSource> {
        debug!("Building {:?} signal source (seed {})", self, seed);
        match self {
            SignalKind::Trig => Box::new(TrigSignal::default()),
            SignalKind::Jitter => Box::new(JitterSignal::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        assert_eq!(SignalKind::Trig.build(0).name(), "trig");
        assert_eq!(SignalKind::Jitter.build(0).name(), "jitter");
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed = SignalKind::Trig.build(0);
        let direct = TrigSignal::default().value_at(0.2);
        assert_eq!(boxed.next(0.2).value, direct);
    }
}
