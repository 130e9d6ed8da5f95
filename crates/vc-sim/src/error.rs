use thiserror::Error;

use vc_core::{Coord, CoreError};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid model configuration: {0}")]
    Config(#[from] CoreError),

    #[error("dirty cell {coord} lies outside the {width}x{height} grid")]
    DirtOutOfBounds {
        coord:  Coord,
        width:  u32,
        height: u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
