//! Fluent builder for constructing a [`Model`].

use tracing::debug;

use vc_behavior::{AgentRngs, Cleaner, CleaningRule, RandomWalkRule};
use vc_core::{AgentId, CleanerConfig, SimRng, Step};
use vc_grid::{DirtCells, Grid};

use crate::{Model, Scheduler, SimError, SimResult};

/// Fluent builder for [`Model<R>`].
///
/// # Required inputs
///
/// - [`CleanerConfig`] - grid size, dirt percentage, agent count, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                       |
/// |--------------------------|-----------------------------------------------|
/// | `.rule(r)`               | [`RandomWalkRule`]                            |
/// | `.dirt(d)`               | Random cells per `config.dirty_percentage`    |
/// | `.snapshot_interval(n)`  | `0` (no snapshots)                            |
///
/// # Example
///
/// ```rust,ignore
/// let config = CleanerConfig::new(10, 10, 50.0, 4).with_seed(7);
/// let mut model = ModelBuilder::new(config)
///     .snapshot_interval(10)
///     .build()?;
/// model.run(1_000, &mut NoopObserver);
/// ```
pub struct ModelBuilder<R: CleaningRule = RandomWalkRule> {
    config:            CleanerConfig,
    rule:              R,
    dirt:              Option<DirtCells>,
    snapshot_interval: u64,
}

impl ModelBuilder<RandomWalkRule> {
    /// Create a builder using the stock random-walk rule.
    pub fn new(config: CleanerConfig) -> Self {
        Self {
            config,
            rule:              RandomWalkRule,
            dirt:              None,
            snapshot_interval: 0,
        }
    }
}

impl<R: CleaningRule> ModelBuilder<R> {
    /// Replace the decision rule.
    pub fn rule<R2: CleaningRule>(self, rule: R2) -> ModelBuilder<R2> {
        ModelBuilder {
            config:            self.config,
            rule,
            dirt:              self.dirt,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Use exactly these dirty cells instead of sampling
    /// `config.dirty_percentage` of the grid.  Every cell must be on the grid.
    pub fn dirt(mut self, dirt: DirtCells) -> Self {
        self.dirt = Some(dirt);
        self
    }

    /// Deliver agent snapshots to observers every `n` steps (`0` = never).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the config, seed the dirt, place every agent on the center
    /// cell, and return a ready-to-step [`Model`].
    pub fn build(self) -> SimResult<Model<R>> {
        self.config.validate()?;

        let seed = self.config.resolve_seed();
        let mut setup_rng = SimRng::new(seed);
        let (width, height) = (self.config.width, self.config.height);

        // ── Dirt ──────────────────────────────────────────────────────────
        let dirt = match self.dirt {
            Some(d) => {
                if let Some(coord) = d.iter().find(|c| c.x >= width || c.y >= height) {
                    return Err(SimError::DirtOutOfBounds { coord, width, height });
                }
                d
            }
            None => DirtCells::seed(self.config.target_dirty_cells(), width, height, &mut setup_rng),
        };

        // ── Agents ────────────────────────────────────────────────────────
        //
        // Agent RNGs are keyed off a value drawn after dirt seeding so no agent
        // replays the setup stream.
        let agent_count = self.config.agent_count;
        let rngs = AgentRngs::new(agent_count, setup_rng.random());

        let mut grid = Grid::new(width, height);
        let start = grid.center();
        let agents: Vec<Cleaner> = (0..agent_count)
            .map(|i| {
                let id = AgentId(i as u32);
                grid.place(id, start);
                Cleaner::new(id)
            })
            .collect();

        debug!(
            seed,
            width,
            height,
            agents = agent_count,
            dirty = dirt.len(),
            policy = ?self.config.conflict_policy,
            "model built"
        );
        if dirt.is_empty() {
            debug!("no dirty cells; model starts halted");
        }

        Ok(Model {
            scheduler:         Scheduler::new(self.config.conflict_policy),
            config:            self.config,
            seed,
            step:              Step::ZERO,
            grid,
            dirt,
            agents,
            rngs,
            rule:              self.rule,
            snapshot_interval: self.snapshot_interval,
        })
    }
}
