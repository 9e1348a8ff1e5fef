//! Error types for configuration and verification.

use thiserror::Error;

/// Rejected configuration, surfaced when a gate is constructed and before any
/// comparison is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The reference secret is empty; there is nothing to compare against.
    #[error("reference secret must not be empty")]
    EmptySecret,

    /// A zero per-character delay collapses the cost model: every comparison
    /// finishes in the same instant and the analyzer's inversion divides by
    /// zero.
    #[error("per-character delay must be nonzero")]
    ZeroPerCharDelay,

    /// A zero maximum candidate length rejects every candidate.
    #[error("maximum candidate length must be nonzero")]
    ZeroMaxCandidateLen,

    /// A zero attempt budget locks the gate before the first verification.
    #[error("maximum attempts must be nonzero")]
    ZeroMaxAttempts,

    /// The reference secret cannot fit in a candidate, so no candidate could
    /// ever match.
    #[error("reference secret is {len} characters but candidates are capped at {max}")]
    SecretExceedsCandidateLimit {
        /// Character length of the configured secret.
        len: usize,
        /// Configured maximum candidate length.
        max: usize,
    },
}

/// Failure of a single verification attempt.
///
/// These are fatal to the in-flight attempt and surfaced to the caller;
/// retrying without changing the input cannot succeed. The leak analyzer by
/// contrast never errors and degrades to boundary estimates instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The candidate was absent or unusable. The session layer enforces this
    /// before the comparator runs.
    #[error("invalid candidate: {0}")]
    InvalidArgument(&'static str),

    /// The gate was built from an invalid configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The attempt budget is exhausted; the gate refuses further candidates
    /// until [`reset`](crate::CredentialGate::reset).
    #[error("gate is locked after too many failed attempts")]
    Locked,
}
