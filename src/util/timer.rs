//! Delayed actions scoped to a page's lifetime.
//!
//! DESIGN
//! ======
//! Redirects and message expiry run on timers. A page owns one `TimerScope`
//! and cancels it on teardown, so callbacks scheduled before navigation never
//! fire against a disposed page.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct TimerScope {
    alive: Arc<AtomicBool>,
}

impl Default for TimerScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerScope {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a scope that is cancelled when the current reactive owner is
    /// cleaned up. Call from inside a component.
    pub fn for_page() -> Self {
        let scope = Self::new();
        let guard = scope.clone();
        on_cleanup(move || guard.cancel());
        scope
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `action` after `delay` unless the scope is cancelled first.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "csr")]
        {
            let alive = Arc::clone(&self.alive);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if alive.load(Ordering::Relaxed) {
                    action();
                } else {
                    log::debug!("timer dropped after page teardown");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, action);
        }
    }
}
