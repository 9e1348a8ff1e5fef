//! Default constants for the simulated timing model.
//!
//! Each character of a candidate costs a fixed, deliberately large delay so
//! that the timing difference between guesses is visible on a stopwatch, not
//! just to a high-resolution timer.

use std::time::Duration;

/// Cost charged for every character position inspected by a comparator.
pub const DEFAULT_PER_CHAR_DELAY: Duration = Duration::from_millis(100);

/// Cost of rejecting a candidate whose length differs from the secret's.
///
/// Deliberately shorter than one per-character delay. This makes the length
/// check itself observable, which is a documented residual leak of the model
/// (see [`compare_leaky`](crate::compare_leaky)).
pub const DEFAULT_LENGTH_MISMATCH_DELAY: Duration = Duration::from_millis(50);

/// Fixed cost charged after the comparison loop completes.
pub const DEFAULT_FINAL_OVERHEAD_DELAY: Duration = Duration::from_millis(100);

/// Maximum candidate length accepted by the session layer.
pub const DEFAULT_MAX_CANDIDATE_LEN: usize = 8;

/// Failed attempts allowed before a gate locks out further verification.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
