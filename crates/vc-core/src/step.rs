//! Simulation step counter.
//!
//! A step is one full stage-then-commit pass over every agent.  Steps are
//! counted from zero; the first processed step is `Step(1)`, so a freshly
//! built model reports `Step::ZERO` until something actually happens.

/// Number of steps processed so far.
///
/// Stored as `u64`; no realistic step budget comes close to overflowing it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }
}
