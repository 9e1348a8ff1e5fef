//! Inversion of the leaky comparator's cost model.

use crate::types::{LeakEstimate, TimingSample};

/// Estimate how many leading characters of a candidate were correct, from the
/// time the leaky comparator took to reject (or accept) it.
///
/// The leaky comparator charges one per-character delay for every position it
/// inspects and a fixed overhead at the tail of a full match, so the matched
/// prefix length falls out of the elapsed time:
///
/// ```text
/// correct_prefix_len = clamp((elapsed - base_overhead) / per_char_cost,
///                            0, reference_len)
/// ```
///
/// The sample is assumed to come from an equal-length candidate; the shorter
/// length-mismatch rejection lands below the overhead and clamps to zero.
///
/// This is inference over a physical measurement, so it never fails:
/// - elapsed below the overhead clamps to 0;
/// - an estimate past the reference length clamps to `reference_len`, which
///   means either a full match or jitter; confirm against the actual
///   [`ComparisonOutcome`](crate::ComparisonOutcome);
/// - a degenerate model with zero per-character cost carries no per-position
///   information at all and degrades to the upper boundary.
///
/// When `reference` is supplied (demonstration and validation only; a real
/// attacker has no such luxury), the estimate also carries the recovered
/// prefix text.
///
/// ```
/// use std::time::Duration;
/// use prefix_oracle::{analysis::estimate_leak, TimingSample};
///
/// // 300ms against a 100ms-per-character model: two characters matched
/// // before the third position's delay rejected the candidate.
/// let sample = TimingSample {
///     elapsed: Duration::from_millis(300),
///     reference_len: 4,
///     per_char_cost: Duration::from_millis(100),
///     base_overhead: Duration::from_millis(100),
/// };
/// let estimate = estimate_leak(&sample, Some("1234"));
/// assert_eq!(estimate.correct_prefix_len, 2);
/// assert_eq!(estimate.recovered_prefix, "12");
/// ```
pub fn estimate_leak(sample: &TimingSample, reference: Option<&str>) -> LeakEstimate {
    let per_char = sample.per_char_cost.as_nanos();

    let correct_prefix_len = if per_char == 0 {
        sample.reference_len
    } else {
        let budget = sample.elapsed.saturating_sub(sample.base_overhead).as_nanos();
        usize::try_from(budget / per_char)
            .unwrap_or(usize::MAX)
            .min(sample.reference_len)
    };

    let recovered_prefix = reference
        .map(|secret| secret.chars().take(correct_prefix_len).collect())
        .unwrap_or_default();

    LeakEstimate {
        correct_prefix_len,
        recovered_prefix,
    }
}
