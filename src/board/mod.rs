//! Board providers.
//!
//! The engine talks to the grid only through the `Board` trait: dimensions
//! and neighbor lookup. It never sees where the hazards are.
//!
//! `HazardField` is the other side of the table: a fixed hidden layout that
//! answers probes with neighbor counts. It is what a `Session` plays against.

mod field;

pub use field::HazardField;

use crate::core::{Coord, GridDims, Neighbors};

/// Grid collaborator used by the inference engine.
pub trait Board {
    /// Height and width of the grid.
    fn dims(&self) -> GridDims;

    /// In-bounds cells adjacent to `cell`, excluding `cell` itself.
    fn neighbors(&self, cell: Coord) -> Neighbors {
        self.dims().neighbors(cell)
    }
}

impl Board for GridDims {
    fn dims(&self) -> GridDims {
        *self
    }
}
