//! Error types for precondition violations.
//!
//! Only fatal, caller-bug conditions live here. Expected negative results
//! (a rejected placement, an unavailable item, no legal origin) are ordinary
//! return values.

use thiserror::Error;

/// A shape matrix that fails validation at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows or no columns")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidValue { row: usize, col: usize, value: u8 },
    #[error("shape has no filled cells")]
    NoFilledCells,
    #[error("shape is {height}x{width}, larger than the 5x5 limit")]
    TooLarge { height: usize, width: usize },
    #[error("rotation of {0} degrees is not a multiple of 90")]
    UnsupportedAngle(u32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("cannot sample from an empty {0}")]
    EmptyCollection(&'static str),
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
