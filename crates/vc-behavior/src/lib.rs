//! `vc-behavior` - what a cleaning agent is and how it decides what to do.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`agent`]       | `Cleaner` record, `AgentRngs`, `AgentSnapshot`                |
//! | [`intent`]      | `Intent` enum (`Clean`, `MoveTo`, `Stay`)                     |
//! | [`context`]     | `TickContext<'a>` - read-only view handed to the rule         |
//! | [`rule`]        | `CleaningRule` trait                                          |
//! | [`random_walk`] | `RandomWalkRule` - clean if dirty, else try a random neighbor |
//! | [`idle`]        | `IdleRule` - never moves, never cleans                        |
//!
//! # Design notes
//!
//! The two-phase tick in vc-sim works as follows:
//!
//! 1. **Stage**: for every agent in registration order, call
//!    `CleaningRule::decide` with a `TickContext`.  The grid in the context is
//!    the grid as it was when the tick started; a `Clean` intent is applied to
//!    the dirt registry right away.
//!
//! 2. **Commit**: apply every planned move to the grid in the same order.
//!
//! Rules never get mutable access to shared state, so the order agents are
//! asked in cannot change what the grid looks like to any of them.

pub mod agent;
pub mod context;
pub mod idle;
pub mod intent;
pub mod random_walk;
pub mod rule;

#[cfg(test)]
mod tests;

pub use agent::{AgentRngs, AgentSnapshot, Cleaner};
pub use context::TickContext;
pub use idle::IdleRule;
pub use intent::Intent;
pub use random_walk::RandomWalkRule;
pub use rule::CleaningRule;
