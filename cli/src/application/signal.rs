//! One-shot stop signal shared by the stack launcher and the readiness poller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A flag that moves from open to closed once and never reopens.
///
/// Clones share the same flag. The launcher closes it when the stack exits;
/// the poller reads it before every probe. Closing an already closed signal
/// is a no-op.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    closed: Arc<AtomicBool>,
}

impl StopSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the signal.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Returns a guard that closes the signal when dropped, covering early
    /// returns and panics alike.
    #[must_use]
    pub fn close_on_drop(&self) -> CloseOnDrop {
        CloseOnDrop(self.clone())
    }
}

/// Closes its [`StopSignal`] on drop.
#[derive(Debug)]
pub struct CloseOnDrop(StopSignal);

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        self.0.close();
    }
}
