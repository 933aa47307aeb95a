//! # sweep-kb
//!
//! A propositional constraint-propagation engine for hidden-hazard grids.
//!
//! Given a stream of observations ("this safe cell has N hazards among its
//! neighbors"), the engine deduces which cells are certainly safe and which
//! are certainly hazards, and suggests where to probe next.
//!
//! ## Design Principles
//!
//! 1. **Never sees the layout**: The engine only knows grid dimensions and
//!    neighbor relations. Hazard positions arrive as counts.
//!
//! 2. **All-or-nothing updates**: An observation is applied to a snapshot of
//!    the knowledge base and committed only if propagation succeeds.
//!
//! 3. **Deterministic**: Ties are broken in row-major order and guesses come
//!    from a seeded RNG, so every run is reproducible.
//!
//! ## Modules
//!
//! - `core`: Coordinates, grid dimensions, configuration, errors, RNG
//! - `board`: The `Board` trait and fixed hazard layouts
//! - `knowledge`: Constraints and the knowledge base that owns them
//! - `inference`: Fixpoint propagation of observations
//! - `policy`: Safe and random move selection
//! - `agent`: The caller-facing agent
//! - `session`: An agent playing a full game against a fixed layout

pub mod core;
pub mod board;
pub mod knowledge;
pub mod inference;
pub mod policy;
pub mod agent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AgentConfig, Coord, GridDims, Neighbors, ProbeRng,
    EngineError, InconsistencyError, ObservationError,
};

pub use crate::board::{Board, HazardField};

pub use crate::knowledge::{Constraint, KnowledgeBase};

pub use crate::inference::{InferenceEngine, InferenceStats, ProcessReport, Settled};

pub use crate::policy::{Move, MovePolicy};

pub use crate::agent::Agent;

pub use crate::session::{Reveal, Session, SessionEnd, SessionSummary, StepOutcome};
