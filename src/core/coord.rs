//! Grid coordinates and dimensions.
//!
//! A `Coord` is a plain `(row, col)` value. It carries no bound of its own;
//! `GridDims` supplies the height and width that decide whether a coordinate
//! is on the grid and which cells surround it.
//!
//! ```
//! use sweep_kb::core::{Coord, GridDims};
//!
//! let dims = GridDims::new(3, 3);
//!
//! // The centre sees all eight cells around it
//! assert_eq!(dims.neighbors(Coord::new(1, 1)).len(), 8);
//!
//! // A corner only sees three
//! assert_eq!(dims.neighbors(Coord::new(0, 0)).len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Neighbor list of a single cell. Never more than eight entries.
pub type Neighbors = SmallVec<[Coord; 8]>;

/// A grid position.
///
/// Ordering is row-major (row first, then column), which is the tie-break
/// used wherever several cells are equally valid choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Height and width of a rectangular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub height: usize,
    pub width: usize,
}

impl GridDims {
    /// Create grid dimensions.
    ///
    /// Panics if either side is zero.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "Grid must have at least 1 row");
        assert!(width > 0, "Grid must have at least 1 column");
        Self { height, width }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub const fn contains(&self, cell: Coord) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// The in-bounds cells adjacent to `cell`, diagonals included.
    ///
    /// The cell itself is never part of the result. Returned in row-major order.
    #[must_use]
    pub fn neighbors(&self, cell: Coord) -> Neighbors {
        let mut out = Neighbors::new();
        let rows = cell.row.saturating_sub(1)..=(cell.row + 1).min(self.height.saturating_sub(1));
        for row in rows {
            let cols = cell.col.saturating_sub(1)..=(cell.col + 1).min(self.width.saturating_sub(1));
            for col in cols {
                let other = Coord::new(row, col);
                if other != cell {
                    out.push(other);
                }
            }
        }
        out
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }
}
