//! Agent records: `Cleaner` (per-agent state) and `AgentRngs` (per-agent RNG).
//!
//! # Why two types?
//!
//! The stage phase needs `&mut AgentRng` for the agent being asked and
//! `&Grid`/`&DirtCells` for the world at the same time, while the commit
//! phase needs `&mut Cleaner`.  Keeping RNGs in their own `AgentRngs` vector
//! lets the scheduler borrow them independently of the agent records.
//!
//! An agent's coordinate is not stored here: the grid is the single source
//! of truth for positions.

use vc_core::{AgentId, AgentRng, Coord};

// ── Cleaner ───────────────────────────────────────────────────────────────────

/// One cleaning agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cleaner {
    pub id: AgentId,

    /// Destination chosen in the stage phase.  `Some` only between the stage
    /// and commit phases of a tick.
    pub planned: Option<Coord>,

    /// Number of ticks in which this agent ended up on a different cell.
    pub moves: u64,
}

impl Cleaner {
    pub fn new(id: AgentId) -> Self {
        Self { id, planned: None, moves: 0 }
    }
}

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count)
            .map(|i| AgentRng::new(global_seed, AgentId(i as u32)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// Read-only copy of one agent's public state, taken at call time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:    AgentId,
    pub coord: Coord,
    pub moves: u64,
}
