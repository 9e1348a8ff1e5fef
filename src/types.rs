//! Common types shared by the comparator, analyzer, and session layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::TimingModel;

/// Which comparator variant a [`CredentialGate`](crate::CredentialGate) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Early-exit comparison. Runtime depends on where the candidate first
    /// diverges from the secret, which is the exploitable property.
    #[default]
    Leaky,
    /// Full-scan comparison. Runtime depends only on the longer operand's
    /// length, never on where a mismatch occurs.
    ConstantTime,
}

/// Result of a single comparator invocation.
///
/// Produced once per call and immediately consumed by the caller to drive the
/// granted/denied branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// True iff the candidate equals the secret exactly: same length, same
    /// characters in order. Identical for both comparator variants.
    pub matched: bool,
}

/// One wall-clock observation of a comparator invocation.
///
/// Constructed by the caller around the call, consumed exactly once by
/// [`estimate_leak`](crate::estimate_leak). Carries the timing-model
/// parameters the comparison ran under so the estimate does not depend on
/// ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSample {
    /// Measured duration of the comparator call.
    pub elapsed: Duration,
    /// Character length of the reference secret.
    pub reference_len: usize,
    /// Per-character cost of the model the comparison ran under.
    pub per_char_cost: Duration,
    /// Fixed cost subtracted before dividing elapsed time into characters.
    pub base_overhead: Duration,
}

impl TimingSample {
    /// Build a sample from a measured duration and the model it ran under.
    ///
    /// The base overhead is taken from the model's final delay: a leaky
    /// rejection at prefix length `k` spends `k + 1` per-character delays,
    /// and a full match spends `len` of them plus the final delay, so
    /// subtracting one final-sized delay makes the estimator exact whenever
    /// the final delay equals the per-character delay (the reference model).
    /// Otherwise the estimate is correct to within one position.
    pub fn new(elapsed: Duration, reference_len: usize, timing: &TimingModel) -> Self {
        Self {
            elapsed,
            reference_len,
            per_char_cost: timing.per_char_delay,
            base_overhead: timing.final_overhead_delay,
        }
    }
}

/// Partial secret knowledge reconstructed from a [`TimingSample`].
///
/// Valid only under the documented timing-model assumptions: deterministic
/// per-character delay and negligible jitter. An estimate equal to the full
/// reference length means either a complete match or a timing anomaly;
/// confirm against the actual [`ComparisonOutcome`] before trusting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakEstimate {
    /// Estimated number of leading candidate characters that matched the
    /// secret. Always within `0..=reference_len`.
    pub correct_prefix_len: usize,
    /// The matched prefix itself, populated only when the caller supplied the
    /// reference secret (demonstration use; a real attacker has only the
    /// count). Empty otherwise.
    pub recovered_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_FINAL_OVERHEAD_DELAY, DEFAULT_PER_CHAR_DELAY};

    #[test]
    fn sample_copies_model_parameters() {
        let timing = TimingModel::default();
        let sample = TimingSample::new(Duration::from_millis(300), 4, &timing);
        assert_eq!(sample.per_char_cost, DEFAULT_PER_CHAR_DELAY);
        assert_eq!(sample.base_overhead, DEFAULT_FINAL_OVERHEAD_DELAY);
        assert_eq!(sample.reference_len, 4);
    }

    #[test]
    fn default_mode_is_leaky() {
        assert_eq!(Mode::default(), Mode::Leaky);
    }
}
