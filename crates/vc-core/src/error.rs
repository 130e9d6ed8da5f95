//! Configuration error type shared by every `vc-*` crate.
//!
//! Only construction-time problems are errors.  Contract violations (an
//! out-of-bounds coordinate reaching the grid, an unknown agent) are bugs and
//! panic at the call site; expected no-ops (stepping a halted model, cleaning
//! a clean cell) are plain return values.

use thiserror::Error;

/// Everything that can be wrong with a [`CleanerConfig`][crate::CleanerConfig].
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("a {width}x{height} grid has more cells than this platform can index")]
    GridTooLarge { width: u32, height: u32 },

    #[error("dirty cell percentage must lie within 0..=100, got {0}")]
    InvalidDirtPercentage(f64),

    #[error("{requested} agents exceeds the maximum of {max}")]
    TooManyAgents { requested: usize, max: usize },
}

/// Shorthand result type for configuration checks.
pub type CoreResult<T> = Result<T, CoreError>;
