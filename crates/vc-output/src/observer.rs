//! `RecordingObserver<W>` - bridges `ModelObserver` to an `OutputWriter`.

use vc_behavior::AgentSnapshot;
use vc_core::Step;
use vc_sim::ModelObserver;

use crate::row::{AgentMovesRow, DirtyCountRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ModelObserver`] that writes the pre-step dirty count of every step and
/// every agent snapshot to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `ModelObserver`
/// methods have no return value.  After `model.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RecordingObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ModelObserver for RecordingObserver<W> {
    fn on_step_start(&mut self, step: Step, dirty_cells: usize) {
        let row = DirtyCountRow { step: step.0, dirty_cells: dirty_cells as u64 };
        let result = self.writer.write_dirty_count(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, agents: &[AgentSnapshot]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentMovesRow> = agents
            .iter()
            .map(|a| AgentMovesRow::from_snapshot(step, a))
            .collect();
        let result = self.writer.write_agent_moves(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
