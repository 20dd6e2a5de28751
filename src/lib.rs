//! # gravity-ttt
//!
//! Rule engine for gravity tic-tac-toe on a 6×6 board.
//!
//! ## Rules
//!
//! 1. **Four or more** of one symbol in a line (row, column or diagonal)
//!    wins. If both players complete such a line at the same evaluation
//!    the match is a draw.
//!
//! 2. **Exactly three** in a line are removed from the board.
//!
//! 3. **Gravity**: instead of placing, a player may slide every piece
//!    toward one edge. Triples formed by the slide are removed, the board
//!    is compressed again in the same direction, and so on until nothing
//!    more happens or someone wins.
//!
//! ## Architecture
//!
//! - The rule primitives (scan, remove, compress) are pure functions over
//!   a `Board`. The cascade resolver combines them under a
//!   `CascadePolicy`: a placement removes at most once, gravity cascades.
//!
//! - `Match` owns the board and turn state and returns explicit
//!   `TurnReport`s (final board plus replayable steps). It never renders.
//!
//! ## Modules
//!
//! - `core`: players, board, directions, configuration
//! - `rules`: scanner, remover, gravity, cascade resolver, outcome
//! - `game`: intents, turn state, match controller, scoring session
//! - `error`: user-facing error types

pub mod core;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Direction, GravityDirection, GravityRights, MatchConfig, Player,
    PlayerMap, STANDARD_SIZE,
};

pub use crate::rules::{
    compress, remove, scan, CascadePolicy, CascadeResolver, CascadeStep, DrawReason,
    MatchOutcome, PieceMove, Resolution, Run, RunClassification, REMOVAL_LENGTH, WIN_LENGTH,
};

pub use crate::game::{Intent, IntentRecord, Match, MatchSnapshot, Scoreboard, Session, TurnReport, TurnState};

pub use crate::error::{ConfigError, MoveError, ParseBoardError, ParseDirectionError};
