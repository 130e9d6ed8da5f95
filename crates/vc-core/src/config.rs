//! Run configuration.
//!
//! [`CleanerConfig`] carries every construction parameter of a model.  It is a
//! plain struct with `pub` fields so drivers can fill it from CLI flags or
//! literals; [`CleanerConfig::validate`] is the single gate that turns bad
//! input into a [`CoreError`] before anything is allocated.

use crate::{AgentId, Coord, CoreError, CoreResult};

/// How the commit phase treats two agents that planned a move into the same
/// empty cell during one tick.
///
/// The stage phase checks occupancy against the grid as it was at the start
/// of the tick, so it cannot see that another agent is heading for the same
/// cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictPolicy {
    /// Apply every planned move in registration order.  Contending agents end
    /// up sharing the cell and each one counts the move.
    #[default]
    Unarbitrated,

    /// The lowest `AgentId` claiming a cell gets it; later claimants stay put
    /// and do not count a move.
    FirstRegisteredWins,
}

/// Construction parameters for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleanerConfig {
    /// Grid width in cells.  Must be positive.
    pub width: u32,

    /// Grid height in cells.  Must be positive.
    pub height: u32,

    /// Share of cells that start dirty, in percent (`0.0..=100.0`).
    pub dirty_percentage: f64,

    /// Number of cleaning agents.  Zero is allowed; nothing will ever move.
    pub agent_count: usize,

    /// Master RNG seed.  `None` draws a fresh seed from OS entropy at build
    /// time; the chosen value is exposed on the model so the run can be
    /// replayed.
    pub seed: Option<u64>,

    pub conflict_policy: ConflictPolicy,
}

impl CleanerConfig {
    /// Config with an entropy seed and the default conflict policy.
    pub fn new(width: u32, height: u32, dirty_percentage: f64, agent_count: usize) -> Self {
        Self {
            width,
            height,
            dirty_percentage,
            agent_count,
            seed: None,
            conflict_policy: ConflictPolicy::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Check every field.  Returns the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions { width: self.width, height: self.height });
        }
        if (self.width as usize).checked_mul(self.height as usize).is_none() {
            return Err(CoreError::GridTooLarge { width: self.width, height: self.height });
        }
        // NaN fails the range check as well.
        if !(0.0..=100.0).contains(&self.dirty_percentage) {
            return Err(CoreError::InvalidDirtPercentage(self.dirty_percentage));
        }
        if self.agent_count > AgentId::MAX_COUNT {
            return Err(CoreError::TooManyAgents {
                requested: self.agent_count,
                max:       AgentId::MAX_COUNT,
            });
        }
        Ok(())
    }

    /// Total number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells seeded dirty:
    /// `round(width * height * dirty_percentage / 100)`, never more than the
    /// cell count.  An exact half rounds to the even neighbor, so 4.5 cells
    /// seed 4 and 3.5 cells seed 4.
    pub fn target_dirty_cells(&self) -> usize {
        let cells = self.cell_count();
        let target = (cells as f64 * self.dirty_percentage / 100.0).round_ties_even() as usize;
        target.min(cells)
    }

    /// Starting cell shared by every agent: `(width / 2, height / 2)`.
    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    /// The configured seed, or a fresh one from OS entropy.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
