//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `dirty_cells.csv`  - `step,dirty_cells`
//! - `agent_moves.csv`  - `step,agent_id,x,y,moves`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentMovesRow, DirtyCountRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    dirty:    Writer<File>,
    moves:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut dirty = Writer::from_path(dir.join("dirty_cells.csv"))?;
        dirty.write_record(["step", "dirty_cells"])?;

        let mut moves = Writer::from_path(dir.join("agent_moves.csv"))?;
        moves.write_record(["step", "agent_id", "x", "y", "moves"])?;

        Ok(Self { dirty, moves, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_dirty_count(&mut self, row: &DirtyCountRow) -> OutputResult<()> {
        self.dirty.write_record(&[row.step.to_string(), row.dirty_cells.to_string()])?;
        Ok(())
    }

    fn write_agent_moves(&mut self, rows: &[AgentMovesRow]) -> OutputResult<()> {
        for row in rows {
            self.moves.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.moves.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.dirty.flush()?;
        self.moves.flush()?;
        Ok(())
    }
}
