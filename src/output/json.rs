//! JSON serialization for verification results and leak estimates.

use serde::Serialize;

use crate::gate::Verification;
use crate::types::LeakEstimate;

/// A verification paired with the leak estimate derived from it, as one
/// machine-readable record.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptReport<'a> {
    /// The verification result.
    pub verification: &'a Verification,
    /// The analyzer's reading of the verification's timing sample.
    pub estimate: &'a LeakEstimate,
}

/// Serialize an attempt report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for these
/// types).
pub fn to_json(report: &AttemptReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize an attempt report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for these
/// types).
pub fn to_json_pretty(report: &AttemptReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingModel;
    use crate::types::{ComparisonOutcome, TimingSample};
    use std::time::Duration;

    fn make_report() -> (Verification, LeakEstimate) {
        let verification = Verification {
            outcome: ComparisonOutcome { matched: false },
            sample: TimingSample::new(Duration::from_millis(300), 4, &TimingModel::default()),
            attempts_remaining: 2,
        };
        let estimate = LeakEstimate {
            correct_prefix_len: 2,
            recovered_prefix: "12".to_string(),
        };
        (verification, estimate)
    }

    #[test]
    fn serializes_compact() {
        let (verification, estimate) = make_report();
        let json = to_json(&AttemptReport {
            verification: &verification,
            estimate: &estimate,
        })
        .unwrap();
        assert!(json.contains("\"matched\":false"));
        assert!(json.contains("\"correct_prefix_len\":2"));
    }

    #[test]
    fn serializes_pretty() {
        let (verification, estimate) = make_report();
        let json = to_json_pretty(&AttemptReport {
            verification: &verification,
            estimate: &estimate,
        })
        .unwrap();
        assert!(json.contains("\"recovered_prefix\": \"12\""));
    }
}
