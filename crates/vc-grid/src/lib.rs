//! `vc-grid` - the shared world state every cleaning agent acts on.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`grid`]  | `Grid` - bounded occupancy map with Moore neighborhoods    |
//! | [`dirt`]  | `DirtCells` - registry of cells still waiting to be cleaned |
//!
//! Neither type has a recoverable failure mode.  Both treat an out-of-bounds
//! coordinate as a caller bug and panic; callers obtain coordinates only from
//! [`Grid::neighbors_of`] or from the grid's own positions.

pub mod dirt;
pub mod grid;


pub use dirt::DirtCells;
pub use grid::Grid;
