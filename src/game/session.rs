//! A sequence of matches with a running scoreboard.
//!
//! `Session::reset` starts a fresh match but keeps the scores; only
//! `clear_scores` zeroes them.

use serde::{Deserialize, Serialize};

use super::controller::{Match, MatchSnapshot, TurnReport};
use super::intent::Intent;
use crate::core::{GravityDirection, MatchConfig, Player, PlayerMap};
use crate::error::{ConfigError, MoveError};
use crate::rules::MatchOutcome;

/// Wins per player and draw count across matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: PlayerMap<u32>,
    pub draws: u32,
}

impl Scoreboard {
    /// Tally a terminal outcome. `InProgress` is ignored.
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Won(player) => self.wins[player] += 1,
            MatchOutcome::Draw(_) => self.draws += 1,
            MatchOutcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player]
    }

    /// Number of finished matches tallied.
    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.wins.iter().map(|(_, w)| *w).sum::<u32>() + self.draws
    }
}

/// Current match plus scoreboard.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: Match,
    scores: Scoreboard,
}

impl Session {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Match::new(config)?,
            scores: Scoreboard::default(),
        })
    }

    /// The match in play.
    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn place_piece(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        self.apply(Intent::place(row, col))
    }

    pub fn invoke_gravity(&mut self, direction: GravityDirection) -> Result<TurnReport, MoveError> {
        self.apply(Intent::Gravity(direction))
    }

    /// Apply an intent and tally the result if it ended the match.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnReport, MoveError> {
        let report = self.game.apply(intent)?;
        self.scores.record(report.outcome);
        Ok(report)
    }

    /// Start a new match, keeping scores.
    pub fn reset(&mut self) -> MatchSnapshot {
        self.game.reset()
    }

    pub fn clear_scores(&mut self) {
        self.scores = Scoreboard::default();
    }
}
