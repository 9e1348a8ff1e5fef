//! Time sources for comparison measurement.
//!
//! This module provides:
//! - The [`Clock`] trait the comparators charge their delays against
//! - [`SystemClock`] for real wall-clock runs
//! - [`VirtualClock`] for deterministic tests that never sleep

mod clock;

pub use clock::{Clock, SystemClock, VirtualClock};
