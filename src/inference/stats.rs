//! Inference statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters accumulated across every observation an engine has processed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStats {
    /// Observations successfully absorbed.
    pub observations: u32,

    /// Fixpoint passes that changed something.
    pub passes: u32,

    /// Cells newly marked safe or hazard by deduction.
    pub facts_marked: u32,

    /// Constraints added by subset subtraction.
    pub constraints_derived: u32,

    /// Observations rejected for any reason.
    pub rejected: u32,
}

impl InferenceStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average changing passes per observation.
    #[must_use]
    pub fn avg_passes_per_observation(&self) -> f64 {
        if self.observations == 0 {
            0.0
        } else {
            self.passes as f64 / self.observations as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = InferenceStats::new();
        assert_eq!(stats.observations, 0);
        assert_eq!(stats.avg_passes_per_observation(), 0.0);
    }

    #[test]
    fn test_avg_passes() {
        let mut stats = InferenceStats::new();
        stats.observations = 4;
        stats.passes = 10;
        assert_eq!(stats.avg_passes_per_observation(), 2.5);

        stats.reset();
        assert_eq!(stats, InferenceStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = InferenceStats::new();
        stats.facts_marked = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: InferenceStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
