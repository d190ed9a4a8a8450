//! Error types for grid construction and command processing.

use glam::IVec2;
use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::grid::Grid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is zero or does not fit in an `i32`.
    #[error("grid dimensions must be in 1..=i32::MAX, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors raised by a single command.
///
/// Both kinds leave the rover exactly as it was before the command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The symbol is not one of `f`, `b`, `l`, `r`.
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),

    /// The normalized target of a move holds an obstacle.
    #[error("obstacle blocks move to ({}, {})", .0.x, .0.y)]
    ObstacleBlocked(IVec2),
}

/// A batch stopped at `index` because of `source`.
///
/// Commands before `index` have been applied; none after it were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stopped processing at command {index}: {source}")]
pub struct BatchError {
    pub index: usize,
    pub source: CommandError,
}

/// An orientation name could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown orientation: {0:?}")]
pub struct ParseOrientationError(pub String);
