//! Error types.
//!
//! These cover user errors only. Internal invariant violations (a cascade
//! that fails to settle, out-of-bounds indexing) panic instead.

use thiserror::Error;

use crate::core::{Coord, Player};
use crate::rules::MatchOutcome;

/// A rejected player intent. The match state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {coord} is already occupied")]
    OccupiedCell { coord: Coord },

    #[error("cell {coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("{player} has already used gravity this match")]
    GravityExhausted { player: Player },

    #[error("match is over ({outcome})")]
    MatchOver { outcome: MatchOutcome },
}

/// Invalid `MatchConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is too small, a winning line needs at least {min}")]
    BoardTooSmall { size: usize, min: usize },

    #[error("board size {size} is too large")]
    BoardTooLarge { size: usize },

    #[error("cascade limit {limit} is below the minimum of {min} for this board")]
    CascadeLimitTooSmall { limit: usize, min: usize },
}

/// Malformed board text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board text has no rows")]
    Empty,

    #[error("row {row} has {width} cells, expected {size}")]
    NotSquare { row: usize, width: usize, size: usize },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("{count} cells do not fill a {size}x{size} board")]
    CellCount { size: usize, count: usize },
}

/// Unrecognized gravity direction name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown gravity direction: {0}")]
pub struct ParseDirectionError(pub String);
