//! Progress publication and cooperative cancellation

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Single-slot, latest-value progress cell
///
/// The worker overwrites, the observer polls; there is no queue to grow
/// if the observer stalls. Published values are clamped to `[0, 100]` and
/// stored with a monotonic max, so observers see a non-decreasing
/// percentage for the lifetime of one run. The only downward transition
/// is the explicit reset on a fatal error.
#[derive(Debug, Clone, Default)]
pub struct ProgressCell {
    inner: Arc<AtomicU8>,
}

impl ProgressCell {
    /// Create a cell at 0%
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new percentage, keeping the maximum of old and new
    pub fn publish(&self, percent: u8) {
        self.inner.fetch_max(percent.min(100), Ordering::Relaxed);
    }

    /// Latest published percentage
    pub fn get(&self) -> u8 {
        self.inner.load(Ordering::Relaxed)
    }

    /// Reset to 0%, used when a run fails
    pub(crate) fn reset(&self) {
        self.inner.store(0, Ordering::Relaxed);
    }
}

/// Cooperative cancellation flag
///
/// Checked between planning steps and between copied chunks; a set token
/// makes the run fail with [`SplitError::Cancelled`](crate::SplitError)
/// and discards the in-progress part file.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an unset token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_keeps_maximum() {
        let cell = ProgressCell::new();
        cell.publish(40);
        cell.publish(20);
        assert_eq!(cell.get(), 40);
        cell.publish(90);
        assert_eq!(cell.get(), 90);
    }

    #[test]
    fn publish_clamps_to_100() {
        let cell = ProgressCell::new();
        cell.publish(250);
        assert_eq!(cell.get(), 100);
    }

    #[test]
    fn reset_returns_to_zero() {
        let cell = ProgressCell::new();
        cell.publish(80);
        cell.reset();
        assert_eq!(cell.get(), 0);
    }

    #[test]
    fn clones_share_the_slot() {
        let cell = ProgressCell::new();
        let observer = cell.clone();
        cell.publish(55);
        assert_eq!(observer.get(), 55);
    }

    #[test]
    fn cancel_token_is_sticky() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }
}
