//! Cancellable one-shot timers.
//!
//! ARCHITECTURE
//! ============
//! A [`CancelToken`] is a shared flag. The component that starts a timer
//! keeps one clone and cancels it from `on_cleanup`; the spawned task checks
//! the flag after sleeping and drops its callback if the owner is gone, so a
//! late timer never writes into disposed signals.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Run `f` unless the token was cancelled. Returns whether it ran.
    pub fn run_unless_cancelled<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_cancelled() {
            return false;
        }
        f();
        true
    }
}

/// Run `f` once after `delay` unless `token` is cancelled first.
///
/// Browser-only; on the server the callback is dropped so SSR renders the
/// pre-timer state.
pub fn spawn_delayed<F>(delay: Duration, token: CancelToken, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            token.run_unless_cancelled(f);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, token, f);
    }
}
