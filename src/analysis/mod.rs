//! Timing analysis: reconstruct secret knowledge from elapsed durations.
//!
//! The analyzer depends only on the leaky comparator's documented cost model,
//! not on its implementation, so it can be exercised with synthetic
//! [`TimingSample`](crate::TimingSample)s as easily as with measured ones.

mod estimate;

pub use estimate::estimate_leak;
