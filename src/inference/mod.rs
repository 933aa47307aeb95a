//! Inference: turning observations into facts.
//!
//! ## Algorithm
//!
//! `InferenceEngine::process(kb, cell, count)`:
//!
//! 1. Record `cell` as probed and mark it safe.
//! 2. Add the constraint "`count` of `cell`'s neighbors are hazards",
//!    stripped of cells that are already determined.
//! 3. Repeat until a pass changes nothing:
//!    - collect every fact forced by a live constraint (`count == 0` or
//!      `count == |cells|`), drop those constraints, then mark the facts;
//!    - for every pair `A ⊂ B` stage `B - A`, then add the staged
//!      constraints that are new.
//!
//! Each pass scans first and applies afterwards, so the result never depends
//! on the order constraints happen to be stored in. The loop terminates
//! because facts and constraints are drawn from a finite grid and a pass only
//! counts as a change if it adds something not already present.
//!
//! ## Errors
//!
//! Bad input is rejected before anything is touched. A contradiction found
//! during propagation aborts the observation and leaves the caller's
//! knowledge base as it was before the call.

mod engine;
mod stats;

pub use engine::{InferenceEngine, ProcessReport, Settled};
pub use stats::InferenceStats;
