//! The caller-facing deduction agent.
//!
//! An `Agent` bundles a knowledge base, the engine that updates it, and the
//! RNG behind random guesses. Callers feed it observations and ask it where
//! to probe next.
//!
//! ```
//! use sweep_kb::{Agent, AgentConfig, Coord};
//!
//! let mut agent = Agent::new(&AgentConfig::default().with_dims(3, 3));
//!
//! // The centre sees no hazards, so every cell is safe
//! agent.record_observation(Coord::new(1, 1), 0).unwrap();
//! assert!(agent.query_safe(Coord::new(0, 0)));
//! assert_eq!(agent.next_safe_move(), Some(Coord::new(0, 0)));
//! ```

use crate::board::Board;
use crate::core::{AgentConfig, Coord, EngineError, GridDims, ProbeRng};
use crate::inference::{InferenceEngine, InferenceStats, ProcessReport};
use crate::knowledge::KnowledgeBase;
use crate::policy::{Move, MovePolicy};

/// Single-session deduction agent.
#[derive(Clone, Debug)]
pub struct Agent<B: Board = GridDims> {
    engine: InferenceEngine<B>,
    knowledge: KnowledgeBase,
    rng: ProbeRng,
}

impl Agent<GridDims> {
    /// Create an agent for a plain grid.
    ///
    /// Panics if the configured grid has a zero side.
    #[must_use]
    pub fn new(config: &AgentConfig) -> Self {
        Self::with_board(config.dims(), config.seed)
    }
}

impl<B: Board> Agent<B> {
    /// Create an agent over any board provider.
    pub fn with_board(board: B, seed: u64) -> Self {
        Self {
            engine: InferenceEngine::new(board),
            knowledge: KnowledgeBase::new(),
            rng: ProbeRng::new(seed),
        }
    }

    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.engine.board().dims()
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[must_use]
    pub fn stats(&self) -> &InferenceStats {
        self.engine.stats()
    }

    /// Absorb "`hazard_count` of `cell`'s neighbors are hazards".
    ///
    /// `cell` must be on the grid and not a known hazard, and `hazard_count`
    /// cannot exceed its neighbor count. On any error the knowledge base is
    /// left untouched.
    pub fn record_observation(&mut self, cell: Coord, hazard_count: u8) -> Result<ProcessReport, EngineError> {
        self.engine.process(&mut self.knowledge, cell, hazard_count)
    }

    #[must_use]
    pub fn query_safe(&self, cell: Coord) -> bool {
        self.knowledge.is_safe(cell)
    }

    #[must_use]
    pub fn query_hazard(&self, cell: Coord) -> bool {
        self.knowledge.is_hazard(cell)
    }

    /// Read-only move policy over the current knowledge.
    #[must_use]
    pub fn policy(&self) -> MovePolicy<'_> {
        MovePolicy::new(&self.knowledge, self.dims())
    }

    /// The lowest proven-safe cell not yet probed.
    #[must_use]
    pub fn next_safe_move(&self) -> Option<Coord> {
        self.policy().safe_move()
    }

    /// A random unprobed cell not known to be a hazard.
    pub fn next_random_move(&mut self) -> Option<Coord> {
        MovePolicy::new(&self.knowledge, self.engine.board().dims()).random_move(&mut self.rng)
    }

    /// A safe move if one exists, otherwise a random one.
    pub fn next_move(&mut self) -> Option<Move> {
        MovePolicy::new(&self.knowledge, self.engine.board().dims()).next_move(&mut self.rng)
    }
}
