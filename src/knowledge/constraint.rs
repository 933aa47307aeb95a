//! A single logical statement about the grid.
//!
//! `Constraint { cells, count }` reads "exactly `count` of `cells` are
//! hazards". Constraints only ever shrink: cells drop out as they are
//! resolved, and the count drops with every hazard removed.
//!
//! ```
//! use sweep_kb::core::Coord;
//! use sweep_kb::knowledge::Constraint;
//!
//! let a = Coord::new(0, 0);
//! let b = Coord::new(0, 1);
//!
//! let mut c = Constraint::new([a, b], 1).unwrap();
//! assert!(c.known_hazards().is_none());
//!
//! c.record_safe(a).unwrap();
//! assert!(c.known_hazards().unwrap().contains(&b));
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::{Coord, InconsistencyError};

/// "Exactly `count` of these cells are hazards."
///
/// Invariant: `count <= cells.len()`. Every constructor and mutator checks it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Constraint {
    cells: BTreeSet<Coord>,
    count: usize,
}

impl Constraint {
    /// Create a constraint.
    ///
    /// Fails if `count` exceeds the number of distinct cells.
    pub fn new(cells: impl IntoIterator<Item = Coord>, count: usize) -> Result<Self, InconsistencyError> {
        let cells: BTreeSet<Coord> = cells.into_iter().collect();
        if count > cells.len() {
            return Err(InconsistencyError::CountExceedsCells { cells: cells.len(), count });
        }
        Ok(Self { cells, count })
    }

    #[must_use]
    pub fn cells(&self) -> &BTreeSet<Coord> {
        &self.cells
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    /// A constraint over no cells says nothing.
    #[must_use]
    pub fn is_informationless(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, if every one of them must be a hazard.
    #[must_use]
    pub fn known_hazards(&self) -> Option<&BTreeSet<Coord>> {
        (!self.cells.is_empty() && self.count == self.cells.len()).then_some(&self.cells)
    }

    /// All cells, if none of them can be a hazard.
    #[must_use]
    pub fn known_safes(&self) -> Option<&BTreeSet<Coord>> {
        (!self.cells.is_empty() && self.count == 0).then_some(&self.cells)
    }

    /// Check if this constraint fully determines its cells.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.known_hazards().is_some() || self.known_safes().is_some()
    }

    /// Drop a cell now known to be a hazard, decrementing the count.
    ///
    /// No-op if the cell is not part of this constraint. Returns whether the
    /// cell was removed.
    pub fn record_hazard(&mut self, cell: Coord) -> Result<bool, InconsistencyError> {
        if !self.cells.contains(&cell) {
            return Ok(false);
        }
        // A count of zero means every cell here is safe.
        let count = self.count.checked_sub(1).ok_or(InconsistencyError::NegativeCount {
            cells: self.cells.len(),
            minuend: self.count,
            subtrahend: 1,
        })?;
        self.cells.remove(&cell);
        self.count = count;
        Ok(true)
    }

    /// Drop a cell now known to be safe. The count is unchanged.
    ///
    /// No-op if the cell is not part of this constraint. Returns whether the
    /// cell was removed.
    pub fn record_safe(&mut self, cell: Coord) -> Result<bool, InconsistencyError> {
        if !self.cells.contains(&cell) {
            return Ok(false);
        }
        if self.count == self.cells.len() {
            // Every remaining cell was already forced to be a hazard.
            return Err(InconsistencyError::CountExceedsCells {
                cells: self.cells.len() - 1,
                count: self.count,
            });
        }
        self.cells.remove(&cell);
        Ok(true)
    }

    /// Check if this constraint's cells are a strict subset of `other`'s.
    #[must_use]
    pub fn is_strict_subset_of(&self, other: &Constraint) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Subtract a subset constraint: `(self.cells - subset.cells, self.count - subset.count)`.
    ///
    /// Callers must pass a subset of `self`. Fails if the counts cannot be
    /// reconciled, which means the two constraints contradict each other.
    pub fn subtract(&self, subset: &Constraint) -> Result<Constraint, InconsistencyError> {
        debug_assert!(subset.cells.is_subset(&self.cells));

        let cells: BTreeSet<Coord> = self.cells.difference(&subset.cells).copied().collect();
        let count = self.count.checked_sub(subset.count).ok_or(InconsistencyError::NegativeCount {
            cells: cells.len(),
            minuend: self.count,
            subtrahend: subset.count,
        })?;
        Constraint::new(cells, count)
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}} = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_new_rejects_excess_count() {
        assert_eq!(
            Constraint::new([c(0, 0)], 2),
            Err(InconsistencyError::CountExceedsCells { cells: 1, count: 2 })
        );
        // Duplicates collapse before the check
        assert!(Constraint::new([c(0, 0), c(0, 0)], 2).is_err());
    }

    #[test]
    fn test_known_hazards_and_safes() {
        let all_hazards = Constraint::new([c(0, 0), c(0, 1)], 2).unwrap();
        assert_eq!(all_hazards.known_hazards().map(|s| s.len()), Some(2));
        assert!(all_hazards.known_safes().is_none());

        let all_safe = Constraint::new([c(0, 0), c(0, 1)], 0).unwrap();
        assert_eq!(all_safe.known_safes().map(|s| s.len()), Some(2));
        assert!(all_safe.known_hazards().is_none());

        let open = Constraint::new([c(0, 0), c(0, 1)], 1).unwrap();
        assert!(!open.is_resolved());

        let empty = Constraint::new(std::iter::empty(), 0).unwrap();
        assert!(empty.is_informationless());
        assert!(!empty.is_resolved());
    }

    #[test]
    fn test_record_hazard() {
        let mut con = Constraint::new([c(0, 0), c(0, 1), c(1, 0)], 2).unwrap();

        assert_eq!(con.record_hazard(c(5, 5)), Ok(false));
        assert_eq!(con.count(), 2);

        assert_eq!(con.record_hazard(c(0, 1)), Ok(true));
        assert_eq!(con.count(), 1);
        assert!(!con.contains(c(0, 1)));
    }

    #[test]
    fn test_record_hazard_below_zero() {
        let mut con = Constraint::new([c(0, 0), c(0, 1)], 0).unwrap();
        assert!(matches!(
            con.record_hazard(c(0, 0)),
            Err(InconsistencyError::NegativeCount { .. })
        ));
        // Failed update leaves the constraint alone
        assert_eq!(con.cells().len(), 2);
    }

    #[test]
    fn test_record_safe() {
        let mut con = Constraint::new([c(0, 0), c(0, 1), c(1, 0)], 1).unwrap();

        assert_eq!(con.record_safe(c(0, 0)), Ok(true));
        assert_eq!(con.count(), 1);
        assert_eq!(con.cells().len(), 2);
        assert_eq!(con.record_safe(c(0, 0)), Ok(false));

        let mut forced = Constraint::new([c(0, 0)], 1).unwrap();
        assert!(forced.record_safe(c(0, 0)).is_err());
    }

    #[test]
    fn test_subtract() {
        let big = Constraint::new([c(0, 0), c(0, 1), c(0, 2)], 1).unwrap();
        let small = Constraint::new([c(0, 0), c(0, 1)], 1).unwrap();

        assert!(small.is_strict_subset_of(&big));
        assert!(!big.is_strict_subset_of(&small));
        assert!(!big.is_strict_subset_of(&big));

        let derived = big.subtract(&small).unwrap();
        assert_eq!(derived, Constraint::new([c(0, 2)], 0).unwrap());
        assert!(derived.known_safes().is_some());
    }

    #[test]
    fn test_subtract_contradiction() {
        let big = Constraint::new([c(0, 0), c(0, 1), c(0, 2)], 1).unwrap();
        let small = Constraint::new([c(0, 0), c(0, 1)], 2).unwrap();
        assert!(matches!(big.subtract(&small), Err(InconsistencyError::NegativeCount { .. })));

        let big = Constraint::new([c(0, 0), c(0, 1), c(0, 2)], 3).unwrap();
        let small = Constraint::new([c(0, 0), c(0, 1)], 0).unwrap();
        assert!(matches!(big.subtract(&small), Err(InconsistencyError::CountExceedsCells { .. })));
    }

    #[test]
    fn test_display() {
        let con = Constraint::new([c(1, 0), c(0, 1)], 1).unwrap();
        assert_eq!(con.to_string(), "{(0, 1), (1, 0)} = 1");
    }
}
