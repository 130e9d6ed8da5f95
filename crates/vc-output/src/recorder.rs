//! In-memory step recorder.

use vc_behavior::AgentSnapshot;
use vc_core::Step;
use vc_sim::ModelObserver;

/// Collects, per step, the dirty-cell count as it stood when the step began,
/// plus the most recent agent snapshot.
///
/// This is the cheap option when results are analysed in-process; use
/// [`RecordingObserver`][crate::RecordingObserver] to stream them to disk.
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    dirty_counts:  Vec<(Step, usize)>,
    latest_agents: Vec<AgentSnapshot>,
    snapshot_step: Option<Step>,
    halted_at:     Option<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(step, dirty cells at step start)` for every processed step.
    pub fn dirty_counts(&self) -> &[(Step, usize)] {
        &self.dirty_counts
    }

    /// Agent states from the most recent snapshot, in registration order.
    pub fn latest_agents(&self) -> &[AgentSnapshot] {
        &self.latest_agents
    }

    /// Step the latest snapshot was taken at, if any.
    pub fn snapshot_step(&self) -> Option<Step> {
        self.snapshot_step
    }

    /// Step on which the last dirty cell was cleaned, if that happened.
    pub fn halted_at(&self) -> Option<Step> {
        self.halted_at
    }

    /// Cumulative moves per agent from the latest snapshot.
    pub fn moves_per_agent(&self) -> Vec<u64> {
        self.latest_agents.iter().map(|a| a.moves).collect()
    }
}

impl ModelObserver for StepRecorder {
    fn on_step_start(&mut self, step: Step, dirty_cells: usize) {
        self.dirty_counts.push((step, dirty_cells));
    }

    fn on_snapshot(&mut self, step: Step, agents: &[AgentSnapshot]) {
        self.latest_agents.clear();
        self.latest_agents.extend_from_slice(agents);
        self.snapshot_step = Some(step);
    }

    fn on_halt(&mut self, step: Step) {
        self.halted_at = Some(step);
    }
}
