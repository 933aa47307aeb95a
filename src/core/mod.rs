//! Core value types: coordinates, grid dimensions, configuration, errors, RNG.
//!
//! Nothing in here knows about constraints or deduction; the rest of the
//! crate builds on these.

pub mod coord;
pub mod config;
pub mod error;
pub mod rng;

pub use coord::{Coord, GridDims, Neighbors};
pub use config::AgentConfig;
pub use error::{EngineError, InconsistencyError, ObservationError};
pub use rng::ProbeRng;
