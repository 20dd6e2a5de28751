//! Turn bookkeeping.

use serde::{Deserialize, Serialize};

use crate::core::{GravityDirection, GravityRights, Player, PlayerMap};

/// Whose turn it is, the turn counter, and gravity usage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Player to act.
    pub current_player: Player,

    /// Turn number (starts at 1, increments on every completed turn).
    pub turn_number: u32,

    /// Whether each player has invoked gravity this match.
    pub gravity_used: PlayerMap<bool>,

    /// Direction of the most recent gravity invocation.
    pub last_gravity: Option<GravityDirection>,
}

impl TurnState {
    #[must_use]
    pub fn new(first_player: Player) -> Self {
        Self {
            current_player: first_player,
            turn_number: 1,
            gravity_used: PlayerMap::with_value(false),
            last_gravity: None,
        }
    }

    /// Hand the turn to the other player.
    pub fn advance(&mut self) {
        self.current_player = self.current_player.opponent();
        self.turn_number += 1;
    }

    /// Check whether `player` may invoke gravity under `rights`.
    #[must_use]
    pub fn can_use_gravity(&self, player: Player, rights: GravityRights) -> bool {
        match rights {
            GravityRights::Unlimited => true,
            GravityRights::OncePerMatch => !self.gravity_used[player],
        }
    }

    /// Record a gravity invocation by `player`.
    pub fn mark_gravity(&mut self, player: Player, direction: GravityDirection) {
        self.gravity_used[player] = true;
        self.last_gravity = Some(direction);
    }
}
