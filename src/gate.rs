//! Credential-check sessions: configuration, measurement, and lockout.

use serde::{Deserialize, Serialize};

use crate::analysis::estimate_leak;
use crate::compare::{compare_constant_time, compare_leaky};
use crate::config::Config;
use crate::error::{ConfigError, Error};
use crate::measurement::{Clock, SystemClock};
use crate::types::{ComparisonOutcome, LeakEstimate, Mode, TimingSample};

/// Result of one verification attempt: the access decision plus the timing
/// observation an attacker in the same position would have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// The access-granted/denied decision.
    pub outcome: ComparisonOutcome,
    /// Wall-clock observation of the comparator call, ready for
    /// [`estimate_leak`](crate::estimate_leak).
    pub sample: TimingSample,
    /// Failed attempts still allowed before the gate locks.
    pub attempts_remaining: u32,
}

/// A credential-check session.
///
/// The gate owns the reference secret, the timing model, the comparator mode,
/// and the attempt budget, so no free-standing mutable state is involved in
/// a credential check. Verification goes through
/// `&mut self`, which statically serializes attempts within a session: there
/// is never more than one live candidate, and a comparison always runs to
/// completion before the next one can start.
///
/// The clock is a type parameter so the same gate drives both real wall-clock
/// demonstrations ([`SystemClock`]) and deterministic tests
/// ([`VirtualClock`](crate::VirtualClock)).
#[derive(Debug)]
pub struct CredentialGate<C: Clock = SystemClock> {
    config: Config,
    clock: C,
    attempts_remaining: u32,
}

impl CredentialGate<SystemClock> {
    /// Build a gate over real time.
    ///
    /// Fails with a [`ConfigError`] before any comparison is attempted if the
    /// configuration is invalid.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> CredentialGate<C> {
    /// Build a gate over an injected clock.
    pub fn with_clock(config: Config, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let attempts_remaining = config.max_attempts;
        Ok(Self {
            config,
            clock,
            attempts_remaining,
        })
    }

    /// The validated configuration this gate runs under.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Failed attempts still allowed before the gate locks.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Whether the attempt budget is exhausted.
    pub fn is_locked(&self) -> bool {
        self.attempts_remaining == 0
    }

    /// Unlock the gate and restore the full attempt budget.
    pub fn reset(&mut self) {
        self.attempts_remaining = self.config.max_attempts;
        tracing::debug!("gate reset, attempt budget restored");
    }

    /// Check a candidate against the reference secret, timing the comparison.
    ///
    /// The candidate is screened before the comparator runs: an empty
    /// candidate or one over the configured maximum length is rejected with
    /// [`Error::InvalidArgument`], and a locked gate refuses with
    /// [`Error::Locked`]. Neither screening path invokes a comparator, so
    /// neither produces a timing observation.
    ///
    /// A rejection costs one attempt; a match restores the full budget.
    pub fn verify(&mut self, candidate: &str) -> Result<Verification, Error> {
        if self.is_locked() {
            tracing::warn!("verification refused: gate is locked");
            return Err(Error::Locked);
        }
        if candidate.is_empty() {
            return Err(Error::InvalidArgument("candidate must not be empty"));
        }
        if candidate.chars().count() > self.config.max_candidate_len {
            return Err(Error::InvalidArgument(
                "candidate exceeds the configured maximum length",
            ));
        }

        let secret = self.config.reference_secret.as_str();
        tracing::debug!(
            mode = ?self.config.mode,
            candidate_len = candidate.chars().count(),
            "verifying candidate"
        );

        let start = self.clock.now();
        let outcome = match self.config.mode {
            Mode::Leaky => compare_leaky(candidate, secret, &self.config.timing, &self.clock),
            Mode::ConstantTime => {
                compare_constant_time(candidate, secret, &self.config.timing, &self.clock)
            }
        };
        let elapsed = self.clock.now().saturating_sub(start);

        let sample = TimingSample::new(elapsed, self.config.reference_len(), &self.config.timing);

        if outcome.matched {
            self.attempts_remaining = self.config.max_attempts;
            tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "access granted");
        } else {
            self.attempts_remaining -= 1;
            tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                attempts_remaining = self.attempts_remaining,
                "access denied"
            );
            if self.attempts_remaining == 0 {
                tracing::warn!("attempt budget exhausted, gate locked");
            }
        }

        Ok(Verification {
            outcome,
            sample,
            attempts_remaining: self.attempts_remaining,
        })
    }

    /// Run the analyzer over a sample, supplying this gate's own secret so
    /// the recovered prefix is spelled out.
    ///
    /// This is the demonstration view: the gate knows the secret and can show
    /// exactly which characters the timing gave away. An attacker would call
    /// [`estimate_leak`](crate::estimate_leak) without the reference and get
    /// the count alone.
    pub fn estimate_leak(&self, sample: &TimingSample) -> LeakEstimate {
        estimate_leak(sample, Some(&self.config.reference_secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::VirtualClock;
    use std::time::Duration;

    fn gate() -> CredentialGate<VirtualClock> {
        CredentialGate::with_clock(Config::default(), VirtualClock::new()).unwrap()
    }

    #[test]
    fn construction_validates_config() {
        let err = CredentialGate::new(Config::new("")).unwrap_err();
        assert_eq!(err, ConfigError::EmptySecret);
    }

    #[test]
    fn match_grants_access_and_restores_attempts() {
        let mut gate = gate();
        gate.verify("0000").unwrap();
        assert_eq!(gate.attempts_remaining(), 2);

        let verification = gate.verify("1234").unwrap();
        assert!(verification.outcome.matched);
        assert_eq!(verification.attempts_remaining, 3);
        assert_eq!(verification.sample.elapsed, Duration::from_millis(500));
    }

    #[test]
    fn empty_candidate_is_rejected_without_timing() {
        let mut gate = gate();
        let err = gate.verify("").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        // Screening spends no attempt and charges no delay.
        assert_eq!(gate.attempts_remaining(), 3);
    }

    #[test]
    fn oversized_candidate_is_rejected() {
        let mut gate = gate();
        let err = gate.verify("123456789").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn three_failures_lock_the_gate() {
        let mut gate = gate();
        for expected_remaining in [2, 1, 0] {
            let verification = gate.verify("0000").unwrap();
            assert_eq!(verification.attempts_remaining, expected_remaining);
        }
        assert!(gate.is_locked());
        assert_eq!(gate.verify("1234").unwrap_err(), Error::Locked);

        gate.reset();
        assert!(!gate.is_locked());
        assert!(gate.verify("1234").unwrap().outcome.matched);
    }

    #[test]
    fn constant_time_mode_uses_the_other_comparator() {
        let config = Config::default().mode(Mode::ConstantTime);
        let mut gate = CredentialGate::with_clock(config, VirtualClock::new()).unwrap();

        // A first-position mismatch still pays for the whole scan.
        let verification = gate.verify("9234").unwrap();
        assert!(!verification.outcome.matched);
        assert_eq!(verification.sample.elapsed, Duration::from_millis(500));
    }

    #[test]
    fn estimate_leak_spells_out_the_prefix() {
        let mut gate = gate();
        let verification = gate.verify("1239").unwrap();
        let estimate = gate.estimate_leak(&verification.sample);
        assert_eq!(estimate.correct_prefix_len, 3);
        assert_eq!(estimate.recovered_prefix, "123");
    }
}
