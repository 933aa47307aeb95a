//! Error types.
//!
//! Two families are kept apart:
//! - `ObservationError`: the caller handed in something invalid. Nothing was
//!   changed; fix the input and try again.
//! - `InconsistencyError`: propagation hit a contradiction. Either the
//!   supplied observations disagree with each other or the engine has a
//!   defect. The knowledge base cannot absorb the observation.

use thiserror::Error;

use super::coord::Coord;

/// Invalid input from the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds { cell: Coord, height: usize, width: usize },

    #[error("cell {cell} has {neighbors} neighbors but {count} hazards were reported")]
    CountOutOfRange { cell: Coord, count: u8, neighbors: usize },

    #[error("cell {cell} is already known to be a hazard")]
    KnownHazard { cell: Coord },
}

/// Contradiction found while propagating facts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InconsistencyError {
    #[error("cell {cell} would be both safe and a hazard")]
    Contradiction { cell: Coord },

    #[error("constraint over {cells} cells would need {minuend} - {subtrahend} hazards")]
    NegativeCount { cells: usize, minuend: usize, subtrahend: usize },

    #[error("constraint over {cells} cells cannot hold {count} hazards")]
    CountExceedsCells { cells: usize, count: usize },
}

/// Any failure of `Agent::record_observation`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Observation(#[from] ObservationError),

    #[error(transparent)]
    Inconsistent(#[from] InconsistencyError),
}

impl EngineError {
    /// Check if the caller supplied invalid input.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, EngineError::Observation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ObservationError::CountOutOfRange { cell: Coord::new(1, 1), count: 9, neighbors: 8 };
        assert_eq!(err.to_string(), "cell (1, 1) has 8 neighbors but 9 hazards were reported");

        let err = InconsistencyError::Contradiction { cell: Coord::new(0, 2) };
        assert_eq!(err.to_string(), "cell (0, 2) would be both safe and a hazard");
    }

    #[test]
    fn test_engine_error_kinds() {
        let caller: EngineError = ObservationError::KnownHazard { cell: Coord::new(0, 0) }.into();
        assert!(caller.is_caller_error());
        assert_eq!(caller.to_string(), "cell (0, 0) is already known to be a hazard");

        let internal: EngineError = InconsistencyError::CountExceedsCells { cells: 1, count: 2 }.into();
        assert!(!internal.is_caller_error());
    }
}
