//! The two credential comparators: early-exit and constant-time.
//!
//! Both variants charge the same per-character and final delays against the
//! injected [`Clock`], so their timing curves are directly comparable. The
//! difference is purely structural: the leaky variant stops at the first
//! mismatch, the constant-time variant inspects every position of the longer
//! operand no matter what.
//!
//! Both are pure functions of their two operands, the timing model, and the
//! clock. They hold no state between calls and never fail: absent or
//! oversized candidates are the session layer's problem
//! (see [`CredentialGate::verify`](crate::CredentialGate::verify)).

use crate::config::TimingModel;
use crate::measurement::Clock;
use crate::types::ComparisonOutcome;

/// Compare `candidate` against `secret`, stopping at the first mismatch.
///
/// The delay schedule:
/// 1. Differing lengths are rejected after a single
///    [`length_mismatch_delay`](TimingModel::length_mismatch_delay). The
///    shorter fixed cost of this branch reveals that the length was wrong;
///    that residual leak is part of the system under study and is not
///    corrected here.
/// 2. Each position is charged one
///    [`per_char_delay`](TimingModel::per_char_delay) *before* its
///    comparison. The first differing position returns immediately, skipping
///    every remaining position and its delay.
/// 3. A full match is charged one
///    [`final_overhead_delay`](TimingModel::final_overhead_delay).
///
/// Total elapsed time is therefore strictly increasing in the length of the
/// correctly matched prefix. That is the exploitable property this variant
/// exists to demonstrate, not a bug to fix;
/// [`estimate_leak`](crate::estimate_leak) inverts it.
pub fn compare_leaky<C: Clock>(
    candidate: &str,
    secret: &str,
    timing: &TimingModel,
    clock: &C,
) -> ComparisonOutcome {
    let candidate: Vec<char> = candidate.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    if candidate.len() != secret.len() {
        clock.delay(timing.length_mismatch_delay);
        return ComparisonOutcome { matched: false };
    }

    for (got, want) in candidate.iter().zip(secret.iter()) {
        clock.delay(timing.per_char_delay);
        if got != want {
            // Early exit: remaining positions and their delays are skipped.
            return ComparisonOutcome { matched: false };
        }
    }

    clock.delay(timing.final_overhead_delay);
    ComparisonOutcome { matched: true }
}

/// Compare `candidate` against `secret` in time independent of where they
/// differ.
///
/// Every position up to `max(candidate_len, secret_len)` is inspected and
/// charged one [`per_char_delay`](TimingModel::per_char_delay); there is no
/// early exit. A position that is out of range for either operand, or whose
/// characters differ, clears the result without leaving the loop. One
/// [`final_overhead_delay`](TimingModel::final_overhead_delay) after the loop
/// masks any tail variance.
///
/// Guarantee: total elapsed time is a function only of the longer operand's
/// length, never of mismatch position or count. Rejecting a fully wrong
/// candidate costs exactly as much as accepting the secret itself.
pub fn compare_constant_time<C: Clock>(
    candidate: &str,
    secret: &str,
    timing: &TimingModel,
    clock: &C,
) -> ComparisonOutcome {
    let candidate: Vec<char> = candidate.chars().collect();
    let secret: Vec<char> = secret.chars().collect();

    let max_len = candidate.len().max(secret.len());
    let mut matched = true;

    for i in 0..max_len {
        clock.delay(timing.per_char_delay);
        // Out-of-range on either side (length mismatch) or a differing pair
        // clears the flag; the loop continues regardless.
        matched &= candidate.get(i) == secret.get(i);
    }

    clock.delay(timing.final_overhead_delay);
    ComparisonOutcome { matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::VirtualClock;
    use std::time::Duration;

    fn timed<F: FnOnce(&VirtualClock) -> ComparisonOutcome>(
        run: F,
    ) -> (ComparisonOutcome, Duration) {
        let clock = VirtualClock::new();
        let outcome = run(&clock);
        (outcome, clock.now())
    }

    #[test]
    fn leaky_accepts_exact_match() {
        let timing = TimingModel::default();
        let (outcome, elapsed) = timed(|c| compare_leaky("1234", "1234", &timing, c));
        assert!(outcome.matched);
        // Four per-character delays plus the final overhead.
        assert_eq!(elapsed, Duration::from_millis(500));
    }

    #[test]
    fn leaky_fails_fast_on_first_position() {
        let timing = TimingModel::default();
        let (outcome, elapsed) = timed(|c| compare_leaky("9234", "1234", &timing, c));
        assert!(!outcome.matched);
        // One delay for position zero, then immediate return.
        assert_eq!(elapsed, Duration::from_millis(100));
    }

    #[test]
    fn leaky_spends_one_delay_per_matched_prefix_char() {
        let timing = TimingModel::default();
        for (candidate, matched_prefix) in [("0000", 0u64), ("1000", 1), ("1200", 2), ("1230", 3)] {
            let (outcome, elapsed) = timed(|c| compare_leaky(candidate, "1234", &timing, c));
            assert!(!outcome.matched);
            assert_eq!(elapsed, Duration::from_millis((matched_prefix + 1) * 100));
        }
    }

    #[test]
    fn leaky_length_mismatch_short_circuits() {
        let timing = TimingModel::default();
        for candidate in ["1", "123", "12345", "999999"] {
            let (outcome, elapsed) = timed(|c| compare_leaky(candidate, "1234", &timing, c));
            assert!(!outcome.matched);
            assert_eq!(elapsed, Duration::from_millis(50));
        }
    }

    #[test]
    fn constant_time_cost_ignores_mismatch_position() {
        let timing = TimingModel::default();
        let mut costs = Vec::new();
        for candidate in ["0000", "1000", "1200", "1230", "9999"] {
            let (outcome, elapsed) = timed(|c| compare_constant_time(candidate, "1234", &timing, c));
            assert!(!outcome.matched);
            costs.push(elapsed);
        }
        assert!(costs.windows(2).all(|w| w[0] == w[1]));

        // Rejection costs exactly as much as acceptance.
        let (outcome, elapsed) = timed(|c| compare_constant_time("1234", "1234", &timing, c));
        assert!(outcome.matched);
        assert_eq!(elapsed, costs[0]);
        assert_eq!(elapsed, Duration::from_millis(500));
    }

    #[test]
    fn constant_time_cost_tracks_longer_operand() {
        let timing = TimingModel::default();
        let (outcome, elapsed) = timed(|c| compare_constant_time("123456", "1234", &timing, c));
        assert!(!outcome.matched);
        // Six positions inspected, plus the final overhead.
        assert_eq!(elapsed, Duration::from_millis(700));

        let (outcome, elapsed) = timed(|c| compare_constant_time("12", "1234", &timing, c));
        assert!(!outcome.matched);
        assert_eq!(elapsed, Duration::from_millis(500));
    }

    #[test]
    fn both_variants_agree_on_outcomes() {
        let timing = TimingModel::default();
        let cases = [
            ("1234", "1234", true),
            ("1235", "1234", false),
            ("0234", "1234", false),
            ("123", "1234", false),
            ("12345", "1234", false),
            ("", "1234", false),
            ("", "", true),
            ("abc", "abc", true),
        ];
        for (candidate, secret, expected) in cases {
            let clock = VirtualClock::new();
            let leaky = compare_leaky(candidate, secret, &timing, &clock);
            let constant = compare_constant_time(candidate, secret, &timing, &clock);
            assert_eq!(leaky.matched, expected, "leaky: {candidate:?} vs {secret:?}");
            assert_eq!(
                constant.matched, expected,
                "constant-time: {candidate:?} vs {secret:?}"
            );
        }
    }

    #[test]
    fn comparison_is_per_character_not_per_byte() {
        let timing = TimingModel::default();
        // Two multi-byte characters: equal cost to a two-ASCII comparison.
        let (outcome, elapsed) = timed(|c| compare_constant_time("éà", "éà", &timing, c));
        assert!(outcome.matched);
        assert_eq!(elapsed, Duration::from_millis(300));
    }

    #[test]
    fn empty_operands_match_after_final_delay_only() {
        let timing = TimingModel::default();
        let (outcome, elapsed) = timed(|c| compare_leaky("", "", &timing, c));
        assert!(outcome.matched);
        assert_eq!(elapsed, Duration::from_millis(100));

        let (outcome, elapsed) = timed(|c| compare_constant_time("", "", &timing, c));
        assert!(outcome.matched);
        assert_eq!(elapsed, Duration::from_millis(100));
    }
}
