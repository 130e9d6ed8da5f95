//! End-of-run statistics.

use std::fmt;

use vc_behavior::CleaningRule;
use vc_sim::Model;

/// Figures reported after a run: the initial setup, how long the run took and
/// how much got cleaned.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub width:            u32,
    pub height:           u32,
    pub cells:            usize,
    pub agents:           usize,
    pub dirty_percentage: f64,
    pub seed:             u64,
    pub steps:            u64,
    pub initial_dirty:    usize,
    pub remaining_dirty:  usize,
    /// `(cells - remaining_dirty) * 100 / cells`, truncated.
    pub clean_percentage: u64,
    pub total_moves:      u64,
    /// Smallest per-agent move count; `0` with no agents.
    pub min_moves:        u64,
    /// Largest per-agent move count; `0` with no agents.
    pub max_moves:        u64,
    /// `true` if every cell ended clean.
    pub halted:           bool,
}

impl RunSummary {
    pub fn from_model<R: CleaningRule>(model: &Model<R>) -> Self {
        let config = model.config();
        let (width, height) = model.grid_dimensions();
        let cells = config.cell_count();
        let remaining = model.dirty_cell_count();
        let moves = model.agents().iter().map(|a| a.moves);

        Self {
            width,
            height,
            cells,
            agents:           model.agent_count(),
            dirty_percentage: config.dirty_percentage,
            seed:             model.seed(),
            steps:            model.step_count(),
            initial_dirty:    model.dirt().initial_count(),
            remaining_dirty:  remaining,
            clean_percentage: ((cells - remaining) as u64 * 100) / cells as u64,
            total_moves:      model.total_moves(),
            min_moves:        moves.clone().min().unwrap_or(0),
            max_moves:        moves.max().unwrap_or(0),
            halted:           !model.is_running(),
        }
    }

    /// Mean moves per agent; `0.0` with no agents.
    pub fn mean_moves(&self) -> f64 {
        if self.agents == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.agents as f64
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- setup -----")?;
        writeln!(f, "grid            : {} x {} ({} cells)", self.width, self.height, self.cells)?;
        writeln!(f, "agents          : {}", self.agents)?;
        writeln!(f, "dirty cells     : {}% ({} cells)", self.dirty_percentage, self.initial_dirty)?;
        writeln!(f, "seed            : {}", self.seed)?;
        writeln!(f, "----- result -----")?;
        writeln!(
            f,
            "steps           : {}{}",
            self.steps,
            if self.halted { " (all clean)" } else { "" }
        )?;
        writeln!(f, "clean cells     : {}%", self.clean_percentage)?;
        writeln!(f, "dirty remaining : {}", self.remaining_dirty)?;
        write!(
            f,
            "moves           : total {}, mean {:.1}, min {}, max {}",
            self.total_moves,
            self.mean_moves(),
            self.min_moves,
            self.max_moves,
        )
    }
}
