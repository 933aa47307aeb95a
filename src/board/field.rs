//! Fixed hidden hazard layout.

use rustc_hash::FxHashSet;

use super::Board;
use crate::core::{Coord, GridDims, ObservationError};

/// A grid with a known set of hazard cells.
///
/// Layouts are always supplied by the caller; there is no random generation.
///
/// ```
/// use sweep_kb::board::HazardField;
/// use sweep_kb::core::{Coord, GridDims};
///
/// let field = HazardField::new(GridDims::new(3, 3), [Coord::new(0, 0)]).unwrap();
/// assert!(field.is_hazard(Coord::new(0, 0)));
/// assert_eq!(field.nearby_hazards(Coord::new(1, 1)), 1);
/// assert_eq!(field.nearby_hazards(Coord::new(2, 2)), 0);
/// ```
#[derive(Clone, Debug)]
pub struct HazardField {
    dims: GridDims,
    hazards: FxHashSet<Coord>,
}

impl HazardField {
    /// Create a field from its hazard cells.
    ///
    /// Fails if any hazard lies outside the grid.
    pub fn new(dims: GridDims, hazards: impl IntoIterator<Item = Coord>) -> Result<Self, ObservationError> {
        let mut set = FxHashSet::default();
        for cell in hazards {
            if !dims.contains(cell) {
                return Err(ObservationError::OutOfBounds {
                    cell,
                    height: dims.height,
                    width: dims.width,
                });
            }
            set.insert(cell);
        }
        Ok(Self { dims, hazards: set })
    }

    /// Parse a field from rows of `*` (hazard) and `.` (clear).
    ///
    /// Any character other than `*` counts as clear. Returns `None` if the rows
    /// are empty or ragged.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if width == 0 || rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }

        let dims = GridDims::new(rows.len(), width);
        let hazards = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, ch)| *ch == '*')
                    .map(move |(col, _)| Coord::new(row, col))
            })
            .collect();
        Some(Self { dims, hazards })
    }

    /// Check if a cell holds a hazard.
    #[must_use]
    pub fn is_hazard(&self, cell: Coord) -> bool {
        self.hazards.contains(&cell)
    }

    /// Number of hazards among the cells surrounding `cell`.
    #[must_use]
    pub fn nearby_hazards(&self, cell: Coord) -> u8 {
        self.neighbors(cell).iter().filter(|n| self.is_hazard(**n)).count() as u8
    }

    /// Total number of hazards.
    #[must_use]
    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    /// Iterate over hazard cells (unordered).
    pub fn hazards(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hazards.iter().copied()
    }

    /// Check if `flagged`, taken as a set, is exactly this field's hazards.
    pub fn all_flagged<'a>(&self, flagged: impl IntoIterator<Item = &'a Coord>) -> bool {
        let flagged: FxHashSet<Coord> = flagged.into_iter().copied().collect();
        flagged == self.hazards
    }
}

impl Board for HazardField {
    fn dims(&self) -> GridDims {
        self.dims
    }
}
