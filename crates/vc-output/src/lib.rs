//! `vc-output` - result recording for the rust_vc simulator.
//!
//! Everything here is a consumer of the model's public surface; nothing feeds
//! back into the simulation.
//!
//! | Type                   | Role                                                       |
//! |------------------------|------------------------------------------------------------|
//! | [`StepRecorder`]       | In-memory `ModelObserver`: dirty count per step, latest moves |
//! | [`OutputWriter`]       | Trait for file backends                                    |
//! | [`CsvWriter`]          | `dirty_cells.csv` + `agent_moves.csv`                      |
//! | [`RecordingObserver`]  | `ModelObserver` that streams rows into any `OutputWriter`  |
//! | [`RunSummary`]         | End-of-run statistics (clean percentage, move totals, …)   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use vc_output::{CsvWriter, RecordingObserver, RunSummary};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer);
//! model.run(2_000, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! println!("{}", RunSummary::from_model(&model));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod recorder;
pub mod row;
pub mod summary;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use recorder::StepRecorder;
pub use row::{AgentMovesRow, DirtyCountRow};
pub use summary::RunSummary;
pub use writer::OutputWriter;
