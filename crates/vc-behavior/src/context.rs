//! Read-only simulation state passed to every rule callback.

use vc_core::{AgentId, Coord, Step};
use vc_grid::{DirtCells, Grid};

/// A read-only view of the world handed to
/// [`CleaningRule::decide`][crate::CleaningRule::decide].
///
/// # Lifetimes
///
/// The scheduler builds a fresh context for each agent during the stage
/// phase.  `grid` is the same untouched grid for every agent of the tick
/// (moves are only applied in the commit phase).  `dirt` reflects cleaning
/// done by agents visited earlier in the same stage pass.
pub struct TickContext<'a> {
    /// The step being processed (the first step is `Step(1)`).
    pub step: Step,

    /// Occupancy as of the start of the tick.
    pub grid: &'a Grid,

    /// Cells still dirty.
    pub dirt: &'a DirtCells,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(step: Step, grid: &'a Grid, dirt: &'a DirtCells) -> Self {
        Self { step, grid, dirt }
    }

    /// Where `agent` is standing.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Coord {
        self.grid.position(agent)
    }
}
