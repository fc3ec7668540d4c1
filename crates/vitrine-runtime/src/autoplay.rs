#![forbid(unsafe_code)]

//! Single-instance autoplay scheduler.
//!
//! Wraps an interval timer with the invariant that at most one timer is
//! ever scheduled for a widget: starting while running first cancels the
//! old timer, so a manual navigation can "debounce" the next automatic
//! advance by calling [`Autoplay::reset`].

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use crate::timer::{IntervalHandle, spawn_interval};

/// Schedules periodic tick messages for one widget.
pub struct Autoplay<M: Send + 'static> {
    period: Duration,
    sender: mpsc::Sender<M>,
    make_msg: Arc<dyn Fn() -> M + Send + Sync>,
    running: Option<IntervalHandle>,
}

impl<M: Send + 'static> Autoplay<M> {
    /// Create a stopped scheduler.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(
        period: Duration,
        sender: mpsc::Sender<M>,
        make_msg: impl Fn() -> M + Send + Sync + 'static,
    ) -> Self {
        assert!(!period.is_zero(), "autoplay period must be non-zero");
        Self {
            period,
            sender,
            make_msg: Arc::new(make_msg),
            running: None,
        }
    }

    /// The current tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a timer is currently scheduled.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.running.is_some()
    }

    /// Number of scheduled timers. Always 0 or 1.
    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        usize::from(self.running.is_some())
    }

    /// Start the timer, cancelling any previously scheduled one first.
    pub fn start(&mut self) {
        if let Some(previous) = self.running.take() {
            previous.stop();
        }
        let make_msg = Arc::clone(&self.make_msg);
        tracing::debug!(period_ms = self.period.as_millis() as u64, "autoplay start");
        self.running = Some(spawn_interval(self.period, self.sender.clone(), move || {
            make_msg()
        }));
    }

    /// Cancel the scheduled timer, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            tracing::debug!("autoplay stop");
            running.stop();
        }
    }

    /// Restart the timer so the next tick is a full period away.
    ///
    /// Call this on manual navigation; it is what keeps an automatic
    /// advance from landing right after a user click.
    pub fn reset(&mut self) {
        tracing::debug!("autoplay reset");
        self.start();
    }

    /// Change the tick period. Takes effect on the next `start`/`reset`,
    /// or immediately if a timer is scheduled.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn set_period(&mut self, period: Duration) {
        assert!(!period.is_zero(), "autoplay period must be non-zero");
        self.period = period;
        if self.running.is_some() {
            self.start();
        }
    }
}

impl<M: Send + 'static> Drop for Autoplay<M> {
    fn drop(&mut self) {
        // Cancel without joining; IntervalHandle's drop handles it.
        self.running.take();
    }
}
