//! The two-phase scheduler: stage every agent, then commit every move.

use rustc_hash::FxHashSet;
use tracing::trace;

use vc_behavior::{AgentRngs, Cleaner, CleaningRule, Intent, TickContext};
use vc_core::{ConflictPolicy, Step};
use vc_grid::{DirtCells, Grid};

/// Where the scheduler is within a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickPhase {
    /// Between ticks.  Every `Cleaner::planned` is `None`.
    Committed,
    /// Every agent has a planned cell; the grid still looks as it did when
    /// the tick started.
    Staged,
}

/// What one tick did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Dirty cells removed during the stage phase.
    pub cleaned:   usize,
    /// Agents whose cell changed during the commit phase.
    pub moved:     usize,
    /// Moves into a cell another agent had already moved into this tick.
    /// Under `FirstRegisteredWins` these agents stayed put instead.
    pub contested: usize,
}

/// Runs the stage and commit phases over an ordered agent list.
///
/// The scheduler owns no world state; the [`Model`][crate::Model] lends it
/// the grid, dirt registry, agents and RNGs for the duration of a tick.
#[derive(Debug)]
pub struct Scheduler {
    policy: ConflictPolicy,
    phase:  TickPhase,
}

impl Scheduler {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy, phase: TickPhase::Committed }
    }

    #[inline]
    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// One full tick: [`stage`][Self::stage] followed by
    /// [`commit`][Self::commit].
    pub fn tick<R: CleaningRule>(
        &mut self,
        step:   Step,
        rule:   &R,
        agents: &mut [Cleaner],
        rngs:   &mut AgentRngs,
        grid:   &mut Grid,
        dirt:   &mut DirtCells,
    ) -> TickReport {
        let cleaned = self.stage(step, rule, agents, rngs, grid, dirt);
        let (moved, contested) = self.commit(agents, grid);
        TickReport { cleaned, moved, contested }
    }

    /// Ask every agent, in registration order, what it wants to do and record
    /// its planned cell.  `Clean` intents are applied to `dirt` immediately;
    /// the grid is not touched.
    ///
    /// Returns the number of cells cleaned.
    ///
    /// # Panics
    /// Panics if called twice without a `commit` in between.
    pub fn stage<R: CleaningRule>(
        &mut self,
        step:   Step,
        rule:   &R,
        agents: &mut [Cleaner],
        rngs:   &mut AgentRngs,
        grid:   &Grid,
        dirt:   &mut DirtCells,
    ) -> usize {
        assert_eq!(self.phase, TickPhase::Committed, "stage called on an already staged tick");

        let mut cleaned = 0;
        for agent in agents.iter_mut() {
            let here = grid.position(agent.id);
            let intent = {
                let ctx = TickContext::new(step, grid, dirt);
                rule.decide(agent.id, &ctx, rngs.get_mut(agent.id))
            };

            if intent == Intent::Clean {
                if dirt.clean(here) {
                    cleaned += 1;
                } else {
                    trace!(agent = %agent.id, cell = %here, "clean requested on a clean cell");
                }
            }
            agent.planned = Some(intent.destination(here));
        }

        self.phase = TickPhase::Staged;
        cleaned
    }

    /// Apply every planned move, in registration order, and clear the plans.
    ///
    /// Returns `(moved, contested)`; see [`TickReport`].
    ///
    /// # Panics
    /// Panics if no tick is staged, or if a planned cell is off the grid.
    pub fn commit(&mut self, agents: &mut [Cleaner], grid: &mut Grid) -> (usize, usize) {
        assert_eq!(self.phase, TickPhase::Staged, "commit called without a staged tick");

        let mut moved = 0;
        let mut contested = 0;
        let mut claimed: FxHashSet<_> = FxHashSet::default();

        for agent in agents.iter_mut() {
            let Some(target) = agent.planned.take() else {
                continue;
            };
            if target == grid.position(agent.id) {
                continue;
            }

            if !claimed.insert(target) {
                contested += 1;
                trace!(agent = %agent.id, cell = %target, policy = ?self.policy, "contested move");
                if self.policy == ConflictPolicy::FirstRegisteredWins {
                    continue;
                }
            }

            grid.move_agent(agent.id, target);
            agent.moves += 1;
            moved += 1;
        }

        self.phase = TickPhase::Committed;
        (moved, contested)
    }
}
