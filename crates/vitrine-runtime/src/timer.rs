#![forbid(unsafe_code)]

//! Cancellable interval timers.
//!
//! A timer runs on a background thread and sends one message per elapsed
//! period through an [`mpsc::Sender`]. Cancellation uses a condition
//! variable rather than polling, so a cancelled timer wakes immediately
//! instead of sleeping out its period.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Cancellation flag shared between a timer thread and its handle.
///
/// Clones observe the same flag.
#[derive(Clone)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    /// Create a token/handle pair.
    #[must_use]
    pub fn new() -> (Self, CancelHandle) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let token = Self {
            inner: inner.clone(),
        };
        (token, CancelHandle { inner })
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Wait for either cancellation or a timeout.
    ///
    /// Returns `true` if cancelled, `false` if the timeout elapsed.
    /// Loops on the condition variable so a spurious wakeup neither
    /// shortens the wait nor reports a false cancellation.
    pub fn wait(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        if *cancelled {
            return true;
        }

        let start = Instant::now();
        let mut remaining = duration;

        loop {
            let (guard, result) = cvar.wait_timeout(cancelled, remaining).unwrap();
            cancelled = guard;
            if *cancelled {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

/// Requests cancellation of the paired [`CancelToken`].
pub struct CancelHandle {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelHandle {
    /// Cancel the timer. Idempotent.
    pub fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        let mut cancelled = lock.lock().unwrap();
        *cancelled = true;
        cvar.notify_all();
    }
}

/// A running interval timer.
///
/// Dropping the handle cancels the timer without joining its thread;
/// call [`IntervalHandle::stop`] to cancel and wait for it to exit.
pub struct IntervalHandle {
    handle: CancelHandle,
    thread: Option<thread::JoinHandle<()>>,
}

impl IntervalHandle {
    /// Cancel the timer and join its thread.
    pub fn stop(mut self) {
        self.handle.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.handle.cancel();
        // No join here: drop must not block.
    }
}

/// Start a timer that sends `make_msg()` through `sender` every `period`.
///
/// The timer stops when cancelled or when the receiver is dropped.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn spawn_interval<M: Send + 'static>(
    period: Duration,
    sender: mpsc::Sender<M>,
    make_msg: impl Fn() -> M + Send + 'static,
) -> IntervalHandle {
    assert!(!period.is_zero(), "interval period must be non-zero");
    let (token, handle) = CancelToken::new();

    let thread = thread::spawn(move || {
        let mut ticks: u64 = 0;
        loop {
            if token.wait(period) {
                tracing::trace!(ticks, "interval cancelled");
                break;
            }
            ticks += 1;
            if sender.send(make_msg()).is_err() {
                tracing::trace!(ticks, "interval receiver dropped");
                break;
            }
        }
    });

    IntervalHandle {
        handle,
        thread: Some(thread),
    }
}
