//! Agent intents - what an agent asks for during the stage phase.

use vc_core::Coord;

/// The single action an agent chooses for the current tick.
///
/// Produced by [`CleaningRule::decide`][crate::CleaningRule::decide] and
/// consumed by the vc-sim scheduler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Clean the cell the agent is standing on.  The agent does not move this
    /// tick.
    Clean,

    /// Move to an adjacent cell during the commit phase.
    MoveTo(Coord),

    /// Do nothing this tick.
    Stay,
}

impl Intent {
    /// The cell the agent will occupy after commit, given that it starts the
    /// tick on `current`.
    #[inline]
    pub fn destination(self, current: Coord) -> Coord {
        match self {
            Intent::MoveTo(to) => to,
            Intent::Clean | Intent::Stay => current,
        }
    }
}
