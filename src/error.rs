use thiserror::Error;

use crate::math::{GridPos, Side};

/// Top-level error type for the switchyard engine.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to track geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("rotation {0} is not a multiple of 90 degrees")]
    InvalidRotation(i32),

    #[error("{shape} track cannot connect {from} to {to}")]
    Disconnected {
        shape: &'static str,
        from: Side,
        to: Side,
    },

    #[error("track segment must have at least one step")]
    NoSteps,

    #[error("tile must have at least one segment")]
    NoSegments,

    #[error("segment index {index} is out of range for {len} segments")]
    SegmentOutOfRange { index: usize, len: usize },

    #[error("entry point {entry} is not an end of the active path")]
    EntryPointNotOnPath { entry: Side },
}

/// Errors related to the tile and train collections.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("no tile at {0}")]
    TileNotFound(GridPos),

    #[error("train not found")]
    TrainNotFound,

    #[error("tile at {0} is occupied by a train the change would strand")]
    TileOccupied(GridPos),
}

/// Errors related to simulation operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`SwitchyardError`].
pub type Result<T> = std::result::Result<T, SwitchyardError>;
