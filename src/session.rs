//! A full game: an `Agent` probing a `HazardField`.
//!
//! The field plays the observation source. Each step the agent picks a
//! cell (proven safe if possible, otherwise a guess), the field answers
//! with its neighbor count, and the agent absorbs it. The session ends when
//! every clear cell is probed and every hazard proven (`Cleared`), when a
//! guess lands on a hazard (`Detonated`), or when the agent has nowhere left
//! to go (`Exhausted`).
//!
//! Hazards the observations can never pin down (say, one walled in by other
//! hazards) keep a session from clearing: once the clear cells run out the
//! agent has to guess among them.
//!
//! ```
//! use sweep_kb::board::HazardField;
//! use sweep_kb::session::{Session, SessionEnd};
//!
//! let field = HazardField::from_rows(&["...", "...", "..."]).unwrap();
//! let summary = Session::new(field, 42).play().unwrap();
//! assert_eq!(summary.end, SessionEnd::Cleared);
//! ```

use log::{debug, trace};
use serde::Serialize;

use crate::agent::Agent;
use crate::board::{Board, HazardField};
use crate::core::{Coord, EngineError};
use crate::inference::ProcessReport;
use crate::policy::Move;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionEnd {
    /// Every clear cell was probed and every hazard proven.
    Cleared,
    /// A guess hit a hazard.
    Detonated(Coord),
    /// No unprobed cell outside the known hazards remains.
    Exhausted,
}

/// One probe that revealed a count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub chosen: Move,
    pub hazard_count: u8,
    pub report: ProcessReport,
}

/// Result of a single `Session::step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    Revealed(Reveal),
    Finished(SessionEnd),
}

/// Totals for a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Cells probed, guesses included.
    pub probes: u32,
    /// Probes that were random guesses.
    pub guesses: u32,
    /// Hazards the agent proved.
    pub flagged: usize,
    /// Whether the proven hazards are exactly the field's hazards.
    pub all_flagged: bool,
}

/// An agent playing against a fixed field.
#[derive(Clone, Debug)]
pub struct Session {
    field: HazardField,
    agent: Agent,
    end: Option<SessionEnd>,
    probes: u32,
    guesses: u32,
}

impl Session {
    /// Start a session. `seed` drives the agent's guesses.
    #[must_use]
    pub fn new(field: HazardField, seed: u64) -> Self {
        let agent = Agent::with_board(field.dims(), seed);
        Self {
            field,
            agent,
            end: None,
            probes: 0,
            guesses: 0,
        }
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[must_use]
    pub fn field(&self) -> &HazardField {
        &self.field
    }

    /// The end state, once reached.
    #[must_use]
    pub fn end(&self) -> Option<SessionEnd> {
        self.end
    }

    /// Check if every clear cell has been probed and the proven hazards are
    /// exactly the field's hazards.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        let knowledge = self.agent.knowledge();
        let clear_cells = self.field.dims().area() - self.field.hazard_count();
        knowledge.probed().len() == clear_cells && self.field.all_flagged(knowledge.known_hazard().iter())
    }

    /// Probe one cell.
    ///
    /// Once the session has ended, keeps returning the same `Finished`
    /// outcome. Fails only if the agent finds the field's answers
    /// inconsistent, which a well-formed field never produces.
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        if let Some(end) = self.end {
            return Ok(StepOutcome::Finished(end));
        }
        if self.is_cleared() {
            return Ok(self.finish(SessionEnd::Cleared));
        }

        let Some(chosen) = self.agent.next_move() else {
            return Ok(self.finish(SessionEnd::Exhausted));
        };
        let cell = chosen.cell();
        self.probes += 1;
        if !chosen.is_safe() {
            self.guesses += 1;
        }

        if self.field.is_hazard(cell) {
            return Ok(self.finish(SessionEnd::Detonated(cell)));
        }

        let hazard_count = self.field.nearby_hazards(cell);
        let report = self.agent.record_observation(cell, hazard_count)?;
        trace!(target: "session", "probe {} via {:?}: {} hazards nearby", self.probes, chosen, hazard_count);

        Ok(StepOutcome::Revealed(Reveal { chosen, hazard_count, report }))
    }

    /// Step until the session ends.
    pub fn play(&mut self) -> Result<SessionSummary, EngineError> {
        loop {
            if let StepOutcome::Finished(end) = self.step()? {
                return Ok(SessionSummary {
                    end,
                    probes: self.probes,
                    guesses: self.guesses,
                    flagged: self.agent.knowledge().known_hazard().len(),
                    all_flagged: self.field.all_flagged(self.agent.knowledge().known_hazard().iter()),
                });
            }
        }
    }

    fn finish(&mut self, end: SessionEnd) -> StepOutcome {
        debug!(
            target: "session",
            "session ended: {:?} after {} probes ({} guesses)",
            end,
            self.probes,
            self.guesses
        );
        self.end = Some(end);
        StepOutcome::Finished(end)
    }
}
