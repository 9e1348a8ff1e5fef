//! Clock abstraction separating the timing model from the passage of time.
//!
//! The deliberate delays are the mechanism under study, so they go through an
//! injected clock rather than calling `thread::sleep` directly. Swapping in a
//! [`VirtualClock`] turns every delay into an exact counter increment, which
//! makes timing assertions deterministic and instant.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A source of delay and of monotonic readings.
///
/// Implementations are single-threaded by design: the surrounding system runs
/// exactly one comparison at a time, and the delays must run to completion
/// once started or the timing signal being demonstrated would be corrupted.
pub trait Clock {
    /// Block for `duration` according to this clock.
    fn delay(&self, duration: Duration);

    /// Monotonic reading since this clock's epoch.
    ///
    /// Subtracting two readings brackets the cost of the work between them.
    fn now(&self) -> Duration;
}

/// Real time: delays sleep the thread, readings come from a monotonic
/// [`Instant`] epoch captured at construction.
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn delay(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Simulated time: delays advance an internal counter and nothing sleeps.
///
/// Under a virtual clock the elapsed time of a comparison is exactly the sum
/// of the delays it charged, with zero jitter, so tests can assert equality
/// rather than tolerances.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Cell<Duration>,
}

impl VirtualClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for VirtualClock {
    fn delay(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    fn now(&self) -> Duration {
        self.now.get()
    }
}
