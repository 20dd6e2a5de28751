//! Match controller: turn order, gravity rights, terminal bookkeeping.
//!
//! `Match` owns the board exclusively. Every accepted intent runs the
//! cascade resolver to completion and returns a `TurnReport` with the
//! final board, the outcome, and the discrete steps a presentation layer
//! can replay. Rejected intents return a `MoveError` and leave the match
//! untouched.
//!
//! Once the outcome is terminal, only `reset` is accepted.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::intent::{Intent, IntentRecord};
use super::turn::TurnState;
use crate::core::{Board, Coord, GravityDirection, MatchConfig, Player, PlayerMap};
use crate::error::{ConfigError, MoveError};
use crate::rules::{CascadeResolver, CascadeStep, DrawReason, MatchOutcome, Resolution, Run};

/// Everything a caller needs to render one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Player who acted.
    pub player: Player,

    /// What they did.
    pub intent: Intent,

    /// Board after resolution.
    pub board: Board,

    /// Outcome after resolution.
    pub outcome: MatchOutcome,

    /// Compressions and removals, in order.
    pub steps: Vec<CascadeStep>,

    /// Winning runs, when the turn ended the match with a winner or a
    /// simultaneous-win draw.
    pub winning_runs: Vec<Run>,
}

impl TurnReport {
    /// All cleared cells, across every removal step.
    pub fn removed_cells(&self) -> impl Iterator<Item = &Coord> {
        self.steps.iter().flat_map(CascadeStep::removed)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}

/// Read-only view of the whole match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub turn_number: u32,
    pub outcome: MatchOutcome,
    pub gravity_used: PlayerMap<bool>,
    pub last_gravity: Option<GravityDirection>,
}

/// A single match of gravity tic-tac-toe.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    resolver: CascadeResolver,
    board: Board,
    turn: TurnState,
    outcome: MatchOutcome,
    history: Vec<IntentRecord>,
}

impl Default for Match {
    fn default() -> Self {
        Self::from_valid(MatchConfig::default())
    }
}

impl Match {
    /// Create a match after validating `config`.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: MatchConfig) -> Self {
        Self {
            resolver: CascadeResolver::new(config.effective_cascade_limit()),
            board: Board::new(config.board_size),
            turn: TurnState::new(config.first_player),
            outcome: MatchOutcome::InProgress,
            history: Vec::new(),
            config,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Direction of the most recent gravity invocation.
    #[must_use]
    pub fn last_gravity_direction(&self) -> Option<GravityDirection> {
        self.turn.last_gravity
    }

    /// Check whether `player` still holds gravity rights.
    #[must_use]
    pub fn can_use_gravity(&self, player: Player) -> bool {
        self.turn.can_use_gravity(player, self.config.gravity_rights)
    }

    /// Accepted intents since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[IntentRecord] {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board.clone(),
            current_player: self.turn.current_player,
            turn_number: self.turn.turn_number,
            outcome: self.outcome,
            gravity_used: self.turn.gravity_used.clone(),
            last_gravity: self.turn.last_gravity,
        }
    }

    /// Every intent the current player could legally submit.
    ///
    /// Placements come first in row-major order, then gravity directions.
    /// Empty once the match is over.
    #[must_use]
    pub fn legal_intents(&self) -> Vec<Intent> {
        if self.is_over() {
            return Vec::new();
        }

        let mut intents: Vec<Intent> = self.board.empty_coords().map(Intent::Place).collect();
        if self.can_use_gravity(self.turn.current_player) {
            intents.extend(GravityDirection::ALL.into_iter().map(Intent::Gravity));
        }
        intents
    }

    // === Commands ===

    /// Place the current player's piece at `(row, col)`.
    pub fn place_piece(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        self.apply(Intent::place(row, col))
    }

    /// Invoke gravity toward `direction` for the current player.
    pub fn invoke_gravity(&mut self, direction: GravityDirection) -> Result<TurnReport, MoveError> {
        self.apply(Intent::Gravity(direction))
    }

    /// Validate and resolve one intent for the current player.
    pub fn apply(&mut self, intent: Intent) -> Result<TurnReport, MoveError> {
        if let Err(err) = self.check(intent) {
            debug!(%intent, %err, "intent rejected");
            return Err(err);
        }

        let player = self.turn.current_player;
        let resolution = match intent {
            Intent::Place(coord) => self.resolver.place(&mut self.board, coord, player),
            Intent::Gravity(direction) => {
                self.turn.mark_gravity(player, direction);
                self.resolver.gravity(&mut self.board, direction)
            }
        };

        Ok(self.finish_turn(player, intent, resolution))
    }

    /// Discard the board and turn state and start a fresh match with the
    /// same configuration.
    pub fn reset(&mut self) -> MatchSnapshot {
        *self = Self::from_valid(self.config.clone());
        self.snapshot()
    }

    fn check(&self, intent: Intent) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::MatchOver {
                outcome: self.outcome,
            });
        }

        match intent {
            Intent::Place(coord) => {
                if !self.board.contains(coord) {
                    return Err(MoveError::OutOfBounds {
                        coord,
                        size: self.board.size(),
                    });
                }
                if !self.board.get(coord).is_empty() {
                    return Err(MoveError::OccupiedCell { coord });
                }
            }
            Intent::Gravity(_) => {
                let player = self.turn.current_player;
                if !self.can_use_gravity(player) {
                    return Err(MoveError::GravityExhausted { player });
                }
            }
        }

        Ok(())
    }

    fn finish_turn(&mut self, player: Player, intent: Intent, resolution: Resolution) -> TurnReport {
        let outcome = match resolution.outcome {
            Some(outcome) => outcome,
            None if matches!(intent, Intent::Place(_)) && self.board.is_full() => {
                MatchOutcome::Draw(DrawReason::BoardFull)
            }
            None => MatchOutcome::InProgress,
        };

        self.history
            .push(IntentRecord::new(player, intent, self.turn.turn_number));
        self.outcome = outcome;

        if outcome.is_terminal() {
            info!(%outcome, turn = self.turn.turn_number, "match finished");
        } else {
            self.turn.advance();
        }

        TurnReport {
            player,
            intent,
            board: self.board.clone(),
            outcome,
            steps: resolution.steps,
            winning_runs: resolution.winning_runs,
        }
    }
}
