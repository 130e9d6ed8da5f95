//! Strongly typed agent identifier.
//!
//! `AgentId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! per-agent `Vec`s via `id.0 as usize`, but callers should prefer
//! [`AgentId::index`] for clarity.

use std::fmt;

/// Registration index of a cleaning agent.  Max ~4.3 billion agents.
///
/// Agents are numbered `0..agent_count` in the order they were created, which
/// is also the order the scheduler visits them in every phase of every tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Largest number of agents a model can register.
    pub const MAX_COUNT: usize = u32::MAX as usize;

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
