//! Agent configuration.
//!
//! The engine never learns the hazard layout; all it needs up front is the
//! grid size and a seed for the random fallback move.

use serde::{Deserialize, Serialize};

use super::coord::GridDims;

/// Configuration for an `Agent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Grid height (rows).
    pub height: usize,

    /// Grid width (columns).
    pub width: usize,

    /// Seed for random move selection.
    /// Same seed produces the same sequence of guesses.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Set the grid size.
    #[must_use]
    pub fn with_dims(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Grid dimensions described by this config.
    ///
    /// Panics if either side is zero.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.dims(), GridDims::new(8, 8));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AgentConfig::default().with_dims(16, 30).with_seed(7);
        assert_eq!(config.height, 16);
        assert_eq!(config.width, 30);
        assert_eq!(config.seed, 7);
        assert_eq!(config.dims().area(), 480);
    }

    #[test]
    fn test_serialization() {
        let config = AgentConfig::default().with_dims(5, 6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Grid must have at least 1 column")]
    fn test_zero_width() {
        let _ = AgentConfig::default().with_dims(3, 0).dims();
    }
}
