//! Cooperative cancellation token

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop flag checked by the sampler before every step
///
/// Clones share one flag, so a Ctrl-C task or a key handler can hold one
/// clone while the loop polls another.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    cancelled: Arc<AtomicBool>,
}

impl Shutdown {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this token to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check whether [`Self::cancel`] has been called on any clone
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let token = Shutdown::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());

        handle.cancel();
        assert!(token.is_cancelled());
        assert!(handle.is_cancelled());
    }
}
