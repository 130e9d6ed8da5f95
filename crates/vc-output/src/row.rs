//! Plain data row types written by output backends.

use vc_behavior::AgentSnapshot;
use vc_core::Step;

/// Dirty-cell count at the start of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyCountRow {
    pub step:        u64,
    pub dirty_cells: u64,
}

/// One agent's position and cumulative moves after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentMovesRow {
    pub step:     u64,
    pub agent_id: u32,
    pub x:        u32,
    pub y:        u32,
    pub moves:    u64,
}

impl AgentMovesRow {
    pub fn from_snapshot(step: Step, snap: &AgentSnapshot) -> Self {
        Self {
            step:     step.0,
            agent_id: snap.id.0,
            x:        snap.coord.x,
            y:        snap.coord.y,
            moves:    snap.moves,
        }
    }
}
