//! The `Model` struct: owns the world and drives the scheduler.

use tracing::{info, trace};

use vc_behavior::{AgentRngs, AgentSnapshot, Cleaner, CleaningRule, RandomWalkRule};
use vc_core::{CleanerConfig, Step};
use vc_grid::{DirtCells, Grid};

use crate::{ModelObserver, NoopObserver, Scheduler};

/// A running cleaning simulation.
///
/// `Model<R>` owns every piece of world state (grid, dirt registry, agents,
/// per-agent RNGs) plus the [`Scheduler`] and the decision rule `R`.  External
/// code can only read that state; the one way to change it is to step the
/// model.
///
/// Once the last dirty cell is cleaned the model halts: further calls to
/// [`step`][Self::step] are no-ops that change nothing, not even the step
/// counter.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model<R: CleaningRule = RandomWalkRule> {
    pub(crate) config:            CleanerConfig,
    pub(crate) seed:              u64,
    pub(crate) step:              Step,
    pub(crate) grid:              Grid,
    pub(crate) dirt:              DirtCells,
    /// Agents in registration order; `agents[i].id == AgentId(i)`.
    pub(crate) agents:            Vec<Cleaner>,
    pub(crate) rngs:              AgentRngs,
    pub(crate) scheduler:         Scheduler,
    pub(crate) rule:              R,
    /// Snapshot cadence for observers, in steps.  `0` disables snapshots.
    pub(crate) snapshot_interval: u64,
}

impl<R: CleaningRule> Model<R> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick.  Returns `false` (and does nothing) if the model has
    /// already halted.
    pub fn step(&mut self) -> bool {
        self.step_observed(&mut NoopObserver)
    }

    /// [`step`][Self::step], reporting to `observer`.
    pub fn step_observed<O: ModelObserver>(&mut self, observer: &mut O) -> bool {
        if !self.is_running() {
            return false;
        }

        self.step = self.step.next();
        let now = self.step;
        observer.on_step_start(now, self.dirt.len());

        let report = self.scheduler.tick(
            now,
            &self.rule,
            &mut self.agents,
            &mut self.rngs,
            &mut self.grid,
            &mut self.dirt,
        );
        let dirty = self.dirt.len();
        trace!(
            step = now.0,
            cleaned = report.cleaned,
            moved = report.moved,
            contested = report.contested,
            dirty,
            "step complete"
        );
        observer.on_step_end(now, &report, dirty);

        if self.snapshot_interval > 0 && now.0 % self.snapshot_interval == 0 {
            observer.on_snapshot(now, &self.agent_snapshot());
        }

        if dirty == 0 {
            info!(steps = now.0, agents = self.agents.len(), "every cell is clean; model halted");
            observer.on_halt(now);
        }
        true
    }

    /// Step until the model halts or `max_steps` ticks have been processed,
    /// whichever comes first.  Returns the number of ticks processed.
    pub fn run<O: ModelObserver>(&mut self, max_steps: u64, observer: &mut O) -> u64 {
        let mut taken = 0;
        while taken < max_steps && self.step_observed(observer) {
            taken += 1;
        }
        observer.on_run_end(self.step);
        taken
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    /// `true` while at least one cell is dirty.
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.dirt.is_empty()
    }

    #[inline]
    pub fn dirty_cell_count(&self) -> usize {
        self.dirt.len()
    }

    /// Every agent's id, coordinate and cumulative move count, in registration
    /// order.
    pub fn agent_snapshot(&self) -> Vec<AgentSnapshot> {
        self.agents
            .iter()
            .map(|a| AgentSnapshot {
                id:    a.id,
                coord: self.grid.position(a.id),
                moves: a.moves,
            })
            .collect()
    }

    /// `(width, height)`.
    #[inline]
    pub fn grid_dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step.0
    }

    /// The seed the run was built from.  Feed it back through
    /// [`CleanerConfig::with_seed`] to replay the run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn dirt(&self) -> &DirtCells {
        &self.dirt
    }

    #[inline]
    pub fn agents(&self) -> &[Cleaner] {
        &self.agents
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Sum of every agent's move counter.
    pub fn total_moves(&self) -> u64 {
        self.agents.iter().map(|a| a.moves).sum()
    }
}
