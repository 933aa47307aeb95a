//! Knowledge base: deduced facts plus the live constraints that feed them.
//!
//! ## Ownership
//!
//! The knowledge base owns every `Constraint`. Nothing outside hands out
//! references into it for mutation; facts flow in through `mark_safe`,
//! `mark_hazard` and `add_constraint`, which update every constraint at once.
//!
//! ## Invariants
//!
//! - `known_safe` and `known_hazard` are disjoint.
//! - Every live constraint mentions only undetermined cells.
//! - Every live constraint satisfies `count <= cells.len()`.
//!
//! Uses `im` persistent collections so a snapshot is an O(1) clone. The
//! inference engine relies on that to apply an observation all-or-nothing.

use im::{OrdSet, Vector};
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::constraint::Constraint;
use crate::core::{Coord, InconsistencyError};

/// Everything the agent knows about the grid.
#[derive(Clone, Debug, Default, Serialize)]
pub struct KnowledgeBase {
    /// Cells already observed. Only grows.
    probed: OrdSet<Coord>,

    /// Cells proven safe. Only grows.
    known_safe: OrdSet<Coord>,

    /// Cells proven to be hazards. Only grows.
    known_hazard: OrdSet<Coord>,

    /// Live constraints over undetermined cells.
    constraints: Vector<Constraint>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    #[must_use]
    pub fn probed(&self) -> &OrdSet<Coord> {
        &self.probed
    }

    #[must_use]
    pub fn known_safe(&self) -> &OrdSet<Coord> {
        &self.known_safe
    }

    #[must_use]
    pub fn known_hazard(&self) -> &OrdSet<Coord> {
        &self.known_hazard
    }

    /// Iterate over live constraints in insertion order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> + '_ {
        self.constraints.iter()
    }

    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_probed(&self, cell: Coord) -> bool {
        self.probed.contains(&cell)
    }

    #[must_use]
    pub fn is_safe(&self, cell: Coord) -> bool {
        self.known_safe.contains(&cell)
    }

    #[must_use]
    pub fn is_hazard(&self, cell: Coord) -> bool {
        self.known_hazard.contains(&cell)
    }

    /// Check if a cell is known either way.
    #[must_use]
    pub fn is_determined(&self, cell: Coord) -> bool {
        self.is_safe(cell) || self.is_hazard(cell)
    }

    // === Updates ===
    //
    // On error the knowledge base may be partially updated and should be
    // discarded. The inference engine only ever calls these on a snapshot.

    /// Record that a cell has been observed. Returns whether it was new.
    pub fn record_probe(&mut self, cell: Coord) -> bool {
        self.probed.insert(cell).is_none()
    }

    /// Mark a cell as a hazard and remove it from every constraint.
    ///
    /// Returns whether the fact was new. Fails if the cell is known safe or
    /// if some constraint already needs all of its cells to be safe.
    pub fn mark_hazard(&mut self, cell: Coord) -> Result<bool, InconsistencyError> {
        if self.known_safe.contains(&cell) {
            return Err(InconsistencyError::Contradiction { cell });
        }
        if self.known_hazard.insert(cell).is_some() {
            return Ok(false);
        }
        for constraint in self.constraints.iter_mut() {
            constraint.record_hazard(cell)?;
        }
        Ok(true)
    }

    /// Mark a cell as safe and remove it from every constraint.
    ///
    /// Returns whether the fact was new. Fails if the cell is a known hazard
    /// or if some constraint already needs all of its cells to be hazards.
    pub fn mark_safe(&mut self, cell: Coord) -> Result<bool, InconsistencyError> {
        if self.known_hazard.contains(&cell) {
            return Err(InconsistencyError::Contradiction { cell });
        }
        if self.known_safe.insert(cell).is_some() {
            return Ok(false);
        }
        for constraint in self.constraints.iter_mut() {
            constraint.record_safe(cell)?;
        }
        Ok(true)
    }

    /// Add a constraint, first stripping cells that are already determined.
    ///
    /// Returns whether it was kept. Constraints that end up empty or that
    /// duplicate a live one are dropped.
    pub fn add_constraint(&mut self, mut constraint: Constraint) -> Result<bool, InconsistencyError> {
        let cells: Vec<Coord> = constraint.cells().iter().copied().collect();
        for cell in cells {
            if self.is_safe(cell) {
                constraint.record_safe(cell)?;
            } else if self.is_hazard(cell) {
                constraint.record_hazard(cell)?;
            }
        }

        if constraint.is_informationless() || self.constraints.iter().any(|c| *c == constraint) {
            return Ok(false);
        }
        self.constraints.push_back(constraint);
        Ok(true)
    }

    /// Keep only the constraints matching `keep`. Returns how many were dropped.
    pub(crate) fn retain_constraints(&mut self, mut keep: impl FnMut(&Constraint) -> bool) -> usize {
        let before = self.constraints.len();
        self.constraints.retain(|c| keep(c));
        before - self.constraints.len()
    }

    /// Drop empty and repeated constraints. Returns how many were dropped.
    pub(crate) fn prune_constraints(&mut self) -> usize {
        let mut seen: FxHashSet<Constraint> = FxHashSet::default();
        self.retain_constraints(|c| !c.is_informationless() && seen.insert(c.clone()))
    }

    /// Verify the structural invariants.
    pub fn check_invariants(&self) -> Result<(), InconsistencyError> {
        if let Some(cell) = self.known_safe.iter().find(|c| self.known_hazard.contains(*c)) {
            return Err(InconsistencyError::Contradiction { cell: *cell });
        }
        for constraint in self.constraints.iter() {
            if constraint.count() > constraint.cells().len() {
                return Err(InconsistencyError::CountExceedsCells {
                    cells: constraint.cells().len(),
                    count: constraint.count(),
                });
            }
            if let Some(cell) = constraint.cells().iter().find(|c| self.is_determined(**c)) {
                // Determined cells must have been stripped by mark_safe/mark_hazard.
                return Err(InconsistencyError::Contradiction { cell: *cell });
            }
        }
        Ok(())
    }
}
