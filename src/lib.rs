//! # prefix-oracle
//!
//! Demonstrate and measure timing side channels in credential comparison.
//!
//! This crate isolates a single mechanism for study: an early-exit string
//! comparison leaks how many leading characters of a guess were correct,
//! purely through how long it takes to reject the guess. It provides:
//! - A deliberately *leaky* comparator that stops at the first mismatch
//! - A *constant-time* comparator whose cost depends only on input lengths
//! - A leak estimator that inverts the leaky comparator's cost model to
//!   recover the matched prefix length from an elapsed duration
//!
//! ## This Is Not a Crypto Library
//!
//! The vulnerable comparator is the subject under test, not a bug. Never use
//! [`compare_leaky`] to check real credentials, and never treat the simulated
//! delay model as a hardening technique. Real systems should hash credentials
//! and compare digests with a vetted constant-time primitive.
//!
//! ## Common Pitfall: Sleeping in Tests
//!
//! The per-character delays are the mechanism under study, so a full leaky
//! comparison of a 4-character secret takes ~500ms of wall-clock time under
//! the default model. Inject a [`VirtualClock`] instead of [`SystemClock`] in
//! tests: delays then advance a counter rather than the real clock, and every
//! timing assertion becomes exact and instant.
//!
//! ## Quick Start
//!
//! ```
//! use prefix_oracle::{Config, CredentialGate, VirtualClock};
//!
//! let clock = VirtualClock::new();
//! let mut gate = CredentialGate::with_clock(Config::default(), clock).unwrap();
//!
//! // A guess with a 2-character correct prefix takes measurably longer
//! // to reject than one that fails at the first position.
//! let verification = gate.verify("1299").unwrap();
//! assert!(!verification.outcome.matched);
//!
//! let estimate = gate.estimate_leak(&verification.sample);
//! assert_eq!(estimate.correct_prefix_len, 2);
//! assert_eq!(estimate.recovered_prefix, "12");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod compare;
mod config;
mod constants;
mod error;
mod gate;
mod types;

// Functional modules
pub mod analysis;
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use compare::{compare_constant_time, compare_leaky};
pub use config::{Config, TimingModel};
pub use constants::{
    DEFAULT_FINAL_OVERHEAD_DELAY, DEFAULT_LENGTH_MISMATCH_DELAY, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_CANDIDATE_LEN, DEFAULT_PER_CHAR_DELAY,
};
pub use error::{ConfigError, Error};
pub use gate::{CredentialGate, Verification};
pub use measurement::{Clock, SystemClock, VirtualClock};
pub use types::{ComparisonOutcome, LeakEstimate, Mode, TimingSample};

// Re-export the estimator for convenience
pub use analysis::estimate_leak;
