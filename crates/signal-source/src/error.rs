//! Signal Source Error Types

use thiserror::Error;

/// Errors raised while configuring a signal source
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Time step must be finite and strictly positive
    #[error("time step {0} must be finite and > 0")]
    InvalidStep(f64),
}
