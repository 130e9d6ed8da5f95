//! `vc-sim` - tick loop orchestrator for the rust_vc simulator.
//!
//! # Two-phase tick
//!
//! ```text
//! Model::step():
//!   if no dirt remains        → no-op, return false
//!   step += 1
//!   ① Stage   - for each agent in registration order:
//!                 intent = rule.decide(agent, ctx, rng)
//!                 Clean       → remove the dirt now
//!                 MoveTo(c)   → planned = c
//!                 Stay        → planned = current cell
//!   ② Commit  - for each agent in the same order:
//!                 move to planned; count a move if the cell changed
//! ```
//!
//! Both phases visit agents in ascending `AgentId` order, so a run is fully
//! determined by its seed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vc_core::CleanerConfig;
//! use vc_sim::{ModelBuilder, NoopObserver};
//!
//! let config = CleanerConfig::new(30, 30, 50.0, 100).with_seed(42);
//! let mut model = ModelBuilder::new(config).build()?;
//! let steps = model.run(2_000, &mut NoopObserver);
//! println!("{} dirty cells left after {steps} steps", model.dirty_cell_count());
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod scheduler;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::Model;
pub use observer::{ModelObserver, NoopObserver};
pub use scheduler::{Scheduler, TickPhase, TickReport};
