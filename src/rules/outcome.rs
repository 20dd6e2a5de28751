//! Match outcome.
//!
//! A match starts `InProgress` and moves at most once to a terminal value.
//! Draws carry the condition that produced them so a caller can render
//! "both completed a line" differently from "the board filled up".

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Why a match ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    /// Both players had a winning run at the same evaluation point.
    SimultaneousWin,
    /// Every cell was filled after a placement and nobody won.
    BoardFull,
}

/// State of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[default]
    InProgress,
    Won(Player),
    Draw(DrawReason),
}

impl MatchOutcome {
    /// Resolve the winning-symbols set of one scan.
    ///
    /// Returns `None` for an empty set, a win for exactly one symbol, and a
    /// simultaneous-win draw for two or more.
    #[must_use]
    pub fn from_winners(winners: &[Player]) -> Option<Self> {
        match winners {
            [] => None,
            [player] => Some(MatchOutcome::Won(*player)),
            _ => Some(MatchOutcome::Draw(DrawReason::SimultaneousWin)),
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, MatchOutcome::Draw(_))
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            MatchOutcome::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::InProgress => f.write_str("in progress"),
            MatchOutcome::Won(p) => write!(f, "{p} wins"),
            MatchOutcome::Draw(DrawReason::SimultaneousWin) => f.write_str("draw: simultaneous win"),
            MatchOutcome::Draw(DrawReason::BoardFull) => f.write_str("draw: board full"),
        }
    }
}
