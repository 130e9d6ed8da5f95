//! Model observer trait for progress reporting and data collection.

use vc_behavior::AgentSnapshot;
use vc_core::Step;

use crate::TickReport;

/// Callbacks invoked by [`Model::step_observed`][crate::Model::step_observed]
/// and [`Model::run`][crate::Model::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  None of them are called for a step that
/// turns out to be a no-op because the model has already halted.
///
/// # Example - progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, _report: &TickReport, dirty_cells: usize) {
///         if step.0 % self.interval == 0 {
///             println!("step {}: {dirty_cells} dirty cells left", step.0);
///         }
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called before the stage phase with the dirty-cell count as it stands
    /// when the step begins.
    fn on_step_start(&mut self, _step: Step, _dirty_cells: usize) {}

    /// Called after the commit phase with what the tick did and the
    /// dirty-cell count it left behind.
    fn on_step_end(&mut self, _step: Step, _report: &TickReport, _dirty_cells: usize) {}

    /// Called after `on_step_end` every `snapshot_interval` steps (see
    /// [`ModelBuilder::snapshot_interval`][crate::ModelBuilder::snapshot_interval]).
    fn on_snapshot(&mut self, _step: Step, _agents: &[AgentSnapshot]) {}

    /// Called once, at the end of the step that cleaned the last dirty cell.
    fn on_halt(&mut self, _step: Step) {}

    /// Called once when [`Model::run`][crate::Model::run] returns.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
