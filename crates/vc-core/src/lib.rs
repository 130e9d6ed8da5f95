//! `vc-core` - foundational types for the `rust_vc` cleaning-agent simulator.
//!
//! This crate is a dependency of every other `vc-*` crate.  It has no `vc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `AgentId`                                                |
//! | [`coord`]    | `Coord` - an integer grid cell                           |
//! | [`step`]     | `Step` - the simulation step counter                     |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (model-level)           |
//! | [`config`]   | `CleanerConfig`, `ConflictPolicy`                        |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CleanerConfig, ConflictPolicy};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use step::Step;
