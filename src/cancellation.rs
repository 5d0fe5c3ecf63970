//! Provides a token-based mechanism for graceful cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that can be used to signal cancellation to a run in progress.
///
/// This struct is a cloneable, thread-safe wrapper around an `Arc<AtomicBool>`.
/// Workers check it between files; a file already being cleaned is finished.
///
/// # Examples
///
/// ```
/// use jscleanup::CancellationToken;
/// use std::thread;
/// use std::time::Duration;
///
/// let token = CancellationToken::new();
/// let token_clone = token.clone();
///
/// let handle = thread::spawn(move || {
///     while !token_clone.is_cancelled() {
///         thread::sleep(Duration::from_millis(10));
///     }
/// });
///
/// token.cancel();
/// handle.join().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)), // false means not cancelled
        }
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on this token or any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Creates a new `CancellationToken` in a non-cancelled state.
///
/// # Examples
///
/// ```
/// use jscleanup::CancellationToken;
///
/// let token: CancellationToken = Default::default();
/// assert!(!token.is_cancelled());
/// ```
impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_by_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
