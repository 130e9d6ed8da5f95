//! The stock vacuum-cleaner rule.

use vc_core::{AgentId, AgentRng};

use crate::{CleaningRule, Intent, TickContext};

/// Clean the current cell if it is dirty; otherwise pick one Moore neighbor
/// uniformly at random and move there if nobody was standing on it when the
/// tick started.
///
/// Exactly one candidate is drawn per tick.  If it is occupied the agent stays
/// and tries again next tick; there is no second draw.  Because occupancy is
/// read from the start-of-tick grid, two agents can pick the same empty cell
/// in one tick; the scheduler's `ConflictPolicy` decides what happens then.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomWalkRule;

impl CleaningRule for RandomWalkRule {
    fn decide(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Intent {
        let here = ctx.position(agent);
        if ctx.dirt.is_dirty(here) {
            return Intent::Clean;
        }

        let neighbors = ctx.grid.neighbors_of(here);
        match rng.choose(&neighbors) {
            Some(&candidate) if !ctx.grid.is_occupied(candidate) => Intent::MoveTo(candidate),
            // Occupied candidate, or a 1x1 grid with nowhere to go.
            _ => Intent::Stay,
        }
    }
}
