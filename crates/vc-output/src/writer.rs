//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentMovesRow, DirtyCountRow, OutputResult};

/// Sink for recorded rows.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`RecordingObserver::take_error`][crate::RecordingObserver::take_error].
pub trait OutputWriter {
    /// Write one dirty-count row.
    fn write_dirty_count(&mut self, row: &DirtyCountRow) -> OutputResult<()>;

    /// Write a batch of per-agent rows.
    fn write_agent_moves(&mut self, rows: &[AgentMovesRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
