//! Configuration for the credential gate and its simulated timing model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FINAL_OVERHEAD_DELAY, DEFAULT_LENGTH_MISMATCH_DELAY, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_MAX_CANDIDATE_LEN, DEFAULT_PER_CHAR_DELAY,
};
use crate::error::ConfigError;
use crate::types::Mode;

/// Fixed delay schedule charged by both comparator variants.
///
/// The same constants drive the leaky and the constant-time paths, so their
/// timing curves are directly comparable: a constant-time comparison of a
/// full-length candidate costs exactly as much as a leaky full match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingModel {
    /// Cost charged before inspecting each character position.
    pub per_char_delay: Duration,
    /// Cost of the leaky variant's early length rejection.
    ///
    /// Shorter than one per-character delay, which itself leaks that the
    /// length was wrong. This is preserved as documented residual leakage,
    /// matching the system under study; the constant-time variant equalizes
    /// per-character timing only.
    pub length_mismatch_delay: Duration,
    /// Cost charged once after the comparison loop.
    pub final_overhead_delay: Duration,
}

impl Default for TimingModel {
    fn default() -> Self {
        Self {
            per_char_delay: DEFAULT_PER_CHAR_DELAY,
            length_mismatch_delay: DEFAULT_LENGTH_MISMATCH_DELAY,
            final_overhead_delay: DEFAULT_FINAL_OVERHEAD_DELAY,
        }
    }
}

impl TimingModel {
    /// A model scaled down by `factor` for wall-clock runs that should not
    /// take half a second per guess.
    pub fn scaled_down(factor: u32) -> Self {
        let model = Self::default();
        Self {
            per_char_delay: model.per_char_delay / factor,
            length_mismatch_delay: model.length_mismatch_delay / factor,
            final_overhead_delay: model.final_overhead_delay / factor,
        }
    }
}

/// Configuration options for a [`CredentialGate`](crate::CredentialGate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The credential candidates are checked against. Fixed for the lifetime
    /// of the gate.
    pub reference_secret: String,

    /// Delay schedule shared by both comparator variants.
    pub timing: TimingModel,

    /// Which comparator variant [`verify`](crate::CredentialGate::verify)
    /// runs. Defaults to [`Mode::Leaky`], the vulnerable configuration the
    /// demonstration starts in.
    pub mode: Mode,

    /// Longest candidate the session layer accepts. Enforced before the
    /// comparator runs; the comparators themselves place no length limit on
    /// their operands.
    pub max_candidate_len: usize,

    /// Failed attempts allowed before the gate locks.
    pub max_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        // Hardcoded credentials are one of the pitfalls this crate
        // demonstrates; do not mistake the default for a practice worth
        // copying.
        Self::new("1234")
    }
}

impl Config {
    /// Create a configuration guarding `secret` with the default timing
    /// model, leaky mode, and attempt budget.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            reference_secret: secret.into(),
            timing: TimingModel::default(),
            mode: Mode::default(),
            max_candidate_len: DEFAULT_MAX_CANDIDATE_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a configuration with all delays divided by 100 (1ms per
    /// character), for live demos that should finish quickly while remaining
    /// measurable with an ordinary monotonic clock.
    pub fn fast(secret: impl Into<String>) -> Self {
        Self {
            timing: TimingModel::scaled_down(100),
            ..Self::new(secret)
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the per-character delay.
    pub fn per_char_delay(mut self, delay: Duration) -> Self {
        assert!(!delay.is_zero(), "per_char_delay must be nonzero");
        self.timing.per_char_delay = delay;
        self
    }

    /// Set the delay charged for a length mismatch.
    pub fn length_mismatch_delay(mut self, delay: Duration) -> Self {
        self.timing.length_mismatch_delay = delay;
        self
    }

    /// Set the fixed delay charged after the comparison loop.
    pub fn final_overhead_delay(mut self, delay: Duration) -> Self {
        self.timing.final_overhead_delay = delay;
        self
    }

    /// Set the comparator variant.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the maximum accepted candidate length.
    pub fn max_candidate_len(mut self, len: usize) -> Self {
        assert!(len > 0, "max_candidate_len must be > 0");
        self.max_candidate_len = len;
        self
    }

    /// Set the number of failed attempts allowed before lockout.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "max_attempts must be > 0");
        self.max_attempts = attempts;
        self
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Character length of the reference secret.
    pub fn reference_len(&self) -> usize {
        self.reference_secret.chars().count()
    }

    /// Check the configuration before any comparison is attempted.
    ///
    /// Gate constructors call this, so an invalid configuration surfaces at
    /// load time rather than mid-verification.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reference_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.timing.per_char_delay.is_zero() {
            return Err(ConfigError::ZeroPerCharDelay);
        }
        if self.max_candidate_len == 0 {
            return Err(ConfigError::ZeroMaxCandidateLen);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        let len = self.reference_len();
        if len > self.max_candidate_len {
            return Err(ConfigError::SecretExceedsCandidateLimit {
                len,
                max: self.max_candidate_len,
            });
        }
        Ok(())
    }
}
