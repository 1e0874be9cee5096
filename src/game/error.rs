//! Error types for game and AI operations.

use std::error::Error;
use std::fmt;

use crate::board::TilePoint;

/// Failure modes surfaced by move application and AI queries.
///
/// All failures are synchronous and reported to the caller before any state
/// is mutated; none are fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OthelloError {
    /// Placement attempted on a tile that is not a legal move
    InvalidMove(TilePoint),
    /// Query addressed a coordinate beyond the board bounds
    OutOfRange(TilePoint),
    /// Move selection requested with an empty candidate set
    NoLegalMoves,
}

impl fmt::Display for OthelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OthelloError::InvalidMove(pt) => {
                write!(f, "invalid move at ({}, {})", pt.row, pt.col)
            }
            OthelloError::OutOfRange(pt) => {
                write!(f, "coordinate ({}, {}) is out of range", pt.row, pt.col)
            }
            OthelloError::NoLegalMoves => write!(f, "no legal moves available"),
        }
    }
}

impl Error for OthelloError {}

/// Convenience alias for Results carrying an [`OthelloError`].
pub type Result<T> = std::result::Result<T, OthelloError>;
