//! Move selection.
//!
//! `MovePolicy` is a read-only view over a `KnowledgeBase`:
//! - `safe_move`: the lowest proven-safe cell not yet probed
//! - `random_move`: a uniform pick among unprobed cells not known to be hazards
//!
//! Neither method mutates anything. Random selection builds the full
//! candidate list and samples once, so an exhausted grid is reported as
//! `None` rather than retried.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Coord, GridDims, ProbeRng};
use crate::knowledge::KnowledgeBase;

/// A chosen cell and how it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// The cell is proven safe.
    Safe(Coord),
    /// No safe cell was available; this one is a guess.
    Random(Coord),
}

impl Move {
    /// The cell to probe.
    #[must_use]
    pub fn cell(self) -> Coord {
        match self {
            Move::Safe(cell) | Move::Random(cell) => cell,
        }
    }

    #[must_use]
    pub fn is_safe(self) -> bool {
        matches!(self, Move::Safe(_))
    }
}

/// Picks the next cell to probe.
#[derive(Clone, Copy, Debug)]
pub struct MovePolicy<'a> {
    kb: &'a KnowledgeBase,
    dims: GridDims,
}

impl<'a> MovePolicy<'a> {
    #[must_use]
    pub fn new(kb: &'a KnowledgeBase, dims: GridDims) -> Self {
        Self { kb, dims }
    }

    /// The lowest (row-major) known-safe cell that has not been probed.
    #[must_use]
    pub fn safe_move(&self) -> Option<Coord> {
        self.kb.known_safe().iter().find(|c| !self.kb.is_probed(**c)).copied()
    }

    /// Cells a random move may pick: not probed and not a known hazard.
    #[must_use]
    pub fn candidates(&self) -> Vec<Coord> {
        self.dims
            .cells()
            .filter(|c| !self.kb.is_probed(*c) && !self.kb.is_hazard(*c))
            .collect()
    }

    /// A uniformly random candidate, or `None` if there are none.
    pub fn random_move(&self, rng: &mut ProbeRng) -> Option<Coord> {
        let candidates = self.candidates();
        let choice = rng.choose(&candidates).copied();
        trace!(target: "policy", "random move among {} candidates: {:?}", candidates.len(), choice);
        choice
    }

    /// A safe move if there is one, otherwise a random move.
    pub fn next_move(&self, rng: &mut ProbeRng) -> Option<Move> {
        self.safe_move()
            .map(Move::Safe)
            .or_else(|| self.random_move(rng).map(Move::Random))
    }
}
