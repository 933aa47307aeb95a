//! Fixpoint propagation over the knowledge base.

use std::collections::BTreeSet;

use log::{debug, trace};
use serde::Serialize;

use super::stats::InferenceStats;
use crate::board::Board;
use crate::core::{Coord, EngineError, InconsistencyError, Neighbors, ObservationError};
use crate::knowledge::{Constraint, KnowledgeBase};

/// What one observation taught the knowledge base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    /// The observed cell.
    pub cell: Coord,

    /// Fixpoint passes that changed something.
    pub passes: u32,

    /// Cells newly known to be safe, in row-major order.
    pub new_safe: Vec<Coord>,

    /// Cells newly known to be hazards, in row-major order.
    pub new_hazard: Vec<Coord>,

    /// Constraints added by subset subtraction.
    pub derived: u32,
}

/// Totals from running the fixpoint loop once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settled {
    /// Passes that changed something. The closing pass that found nothing
    /// new is not counted.
    pub passes: u32,

    /// Facts newly marked across all passes.
    pub facts: u32,

    /// Constraints added across all passes.
    pub derived: u32,
}

impl Settled {
    /// Check if anything changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.facts > 0 || self.derived > 0
    }
}

/// Absorbs observations into a `KnowledgeBase`.
///
/// Generic over the board so the engine can run against a bare `GridDims` or
/// any other neighbor provider.
#[derive(Clone, Debug)]
pub struct InferenceEngine<B: Board> {
    board: B,
    stats: InferenceStats,
}

impl<B: Board> InferenceEngine<B> {
    /// Create an engine over the given board.
    pub fn new(board: B) -> Self {
        Self {
            board,
            stats: InferenceStats::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub fn stats(&self) -> &InferenceStats {
        &self.stats
    }

    /// Check an observation against the board and current knowledge.
    ///
    /// Returns the cell's neighbors on success.
    pub fn validate(&self, kb: &KnowledgeBase, cell: Coord, count: u8) -> Result<Neighbors, ObservationError> {
        let dims = self.board.dims();
        if !dims.contains(cell) {
            return Err(ObservationError::OutOfBounds {
                cell,
                height: dims.height,
                width: dims.width,
            });
        }
        if kb.is_hazard(cell) {
            return Err(ObservationError::KnownHazard { cell });
        }

        let neighbors = self.board.neighbors(cell);
        if usize::from(count) > neighbors.len() {
            return Err(ObservationError::CountOutOfRange {
                cell,
                count,
                neighbors: neighbors.len(),
            });
        }
        Ok(neighbors)
    }

    /// Absorb "`count` of `cell`'s neighbors are hazards" and propagate to a fixpoint.
    ///
    /// All-or-nothing: the work happens on a snapshot of `kb`, which replaces
    /// `kb` only if every step succeeds. On error `kb` is exactly as it was.
    pub fn process(&mut self, kb: &mut KnowledgeBase, cell: Coord, count: u8) -> Result<ProcessReport, EngineError> {
        let neighbors = self.validate(kb, cell, count).map_err(|err| {
            self.stats.rejected += 1;
            debug!(target: "inference", "rejected observation {} = {}: {}", cell, count, err);
            err
        })?;

        let mut next = kb.clone();
        let settled = absorb(&mut next, cell, neighbors, count).map_err(|err| {
            self.stats.rejected += 1;
            debug!(target: "inference", "observation {} = {} is inconsistent: {}", cell, count, err);
            err
        })?;

        let report = ProcessReport {
            cell,
            passes: settled.passes,
            new_safe: next.known_safe().iter().filter(|c| !kb.is_safe(**c)).copied().collect(),
            new_hazard: next.known_hazard().iter().filter(|c| !kb.is_hazard(**c)).copied().collect(),
            derived: settled.derived,
        };
        *kb = next;

        self.stats.observations += 1;
        self.stats.passes += settled.passes;
        self.stats.facts_marked += settled.facts;
        self.stats.constraints_derived += settled.derived;

        debug!(
            target: "inference",
            "observed {} = {}: {} safe, {} hazards, {} derived in {} passes ({} live constraints)",
            cell,
            count,
            report.new_safe.len(),
            report.new_hazard.len(),
            report.derived,
            report.passes,
            kb.constraint_count()
        );
        Ok(report)
    }

    /// Run the propagation loop without a new observation.
    ///
    /// On a knowledge base produced by `process` this is a no-op that reports
    /// zero changing passes. On error `kb` may be partially updated.
    pub fn settle(&self, kb: &mut KnowledgeBase) -> Result<Settled, InconsistencyError> {
        settle(kb)
    }
}

/// Steps 1 to 5 of absorbing an observation, on a knowledge base the caller
/// is prepared to throw away.
fn absorb(kb: &mut KnowledgeBase, cell: Coord, neighbors: Neighbors, count: u8) -> Result<Settled, InconsistencyError> {
    kb.record_probe(cell);
    kb.mark_safe(cell)?;
    kb.add_constraint(Constraint::new(neighbors, usize::from(count))?)?;
    settle(kb)
}

fn settle(kb: &mut KnowledgeBase) -> Result<Settled, InconsistencyError> {
    let mut settled = Settled::default();
    let mut pass = 0;
    loop {
        pass += 1;
        let facts = resolve_facts(kb)?;
        let derived = derive_from_subsets(kb)?;
        trace!(
            target: "inference",
            "pass {}: {} facts, {} derived, {} live constraints",
            pass,
            facts,
            derived,
            kb.constraint_count()
        );

        if facts == 0 && derived == 0 {
            return Ok(settled);
        }
        settled.passes += 1;
        settled.facts += facts;
        settled.derived += derived;
    }
}

/// Collect every fact the live constraints force, drop the constraints that
/// produced them, then mark the facts.
///
/// Scanning finishes before anything is marked, so the outcome does not
/// depend on the order constraints are stored in.
fn resolve_facts(kb: &mut KnowledgeBase) -> Result<u32, InconsistencyError> {
    let mut hazards = BTreeSet::new();
    let mut safes = BTreeSet::new();
    for constraint in kb.constraints() {
        if let Some(cells) = constraint.known_hazards() {
            hazards.extend(cells.iter().copied());
        } else if let Some(cells) = constraint.known_safes() {
            safes.extend(cells.iter().copied());
        }
    }
    if hazards.is_empty() && safes.is_empty() {
        return Ok(0);
    }

    kb.retain_constraints(|c| !c.is_resolved());

    let mut marked = 0;
    for cell in hazards {
        if kb.mark_hazard(cell)? {
            marked += 1;
        }
    }
    // A cell staged on both sides fails here with a contradiction.
    for cell in safes {
        if kb.mark_safe(cell)? {
            marked += 1;
        }
    }
    kb.prune_constraints();

    if marked > 0 {
        debug!(target: "inference", "marked {} facts", marked);
    }
    Ok(marked)
}

/// For every pair `A ⊂ B` of live constraints, stage `B - A`, then add the
/// staged constraints that are new.
fn derive_from_subsets(kb: &mut KnowledgeBase) -> Result<u32, InconsistencyError> {
    let mut staged = BTreeSet::new();
    {
        let live: Vec<&Constraint> = kb.constraints().collect();
        for subset in &live {
            for superset in &live {
                if subset.is_strict_subset_of(superset) {
                    staged.insert(superset.subtract(subset)?);
                }
            }
        }
    }

    let mut added = 0;
    for constraint in staged {
        if kb.add_constraint(constraint)? {
            added += 1;
        }
    }
    Ok(added)
}
