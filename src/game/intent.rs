//! Player intents and their history records.
//!
//! An intent is one of the two things a player can do on their turn:
//! place a piece on an empty cell, or invoke gravity toward an edge.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GravityDirection, Player};

/// A player's chosen action for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the current player's piece on an empty cell.
    Place(Coord),
    /// Compress the board toward an edge and cascade.
    Gravity(GravityDirection),
}

impl Intent {
    /// Convenience constructor for a placement.
    #[must_use]
    pub const fn place(row: usize, col: usize) -> Self {
        Intent::Place(Coord::new(row, col))
    }

    #[must_use]
    pub const fn is_gravity(self) -> bool {
        matches!(self, Intent::Gravity(_))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Place(coord) => write!(f, "place {coord}"),
            Intent::Gravity(dir) => write!(f, "gravity {dir}"),
        }
    }
}

/// An accepted intent with metadata, for replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The player who acted.
    pub player: Player,

    /// What they did.
    pub intent: Intent,

    /// Turn number when the intent was applied.
    pub turn: u32,
}

impl IntentRecord {
    #[must_use]
    pub fn new(player: Player, intent: Intent, turn: u32) -> Self {
        Self {
            player,
            intent,
            turn,
        }
    }
}
