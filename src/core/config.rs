//! Match configuration.
//!
//! A `MatchConfig` picks the board size, who moves first, and the
//! orchestration policy for gravity:
//! - `GravityRights::Unlimited`: any turn may be spent on gravity instead
//!   of a placement (the cascade variant).
//! - `GravityRights::OncePerMatch`: each player may invoke gravity once for
//!   the whole match (the rights-limited variant).
//!
//! The placement path and the gravity cascade are identical in both
//! variants; only the rights bookkeeping differs.

use serde::{Deserialize, Serialize};

use super::board::STANDARD_SIZE;
use super::player::Player;
use crate::error::ConfigError;
use crate::rules::{REMOVAL_LENGTH, WIN_LENGTH};

/// How often a player may invoke gravity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityRights {
    /// Gravity may replace a placement on any turn.
    Unlimited,
    /// Each player may invoke gravity at most once per match.
    #[default]
    OncePerMatch,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Gravity usage policy.
    pub gravity_rights: GravityRights,

    /// Player who moves on turn 1.
    pub first_player: Player,

    /// Override for the cascade iteration cap. `None` derives the cap from
    /// the board (`cells / 3 + 1`).
    #[serde(default)]
    pub cascade_limit: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_SIZE,
            gravity_rights: GravityRights::default(),
            first_player: Player::A,
            cascade_limit: None,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration (6×6, gravity once per match).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlimited gravity, cascades after every invocation.
    #[must_use]
    pub fn cascade_variant() -> Self {
        Self::default().with_gravity_rights(GravityRights::Unlimited)
    }

    /// Each player may invoke gravity once per match.
    #[must_use]
    pub fn rights_limited() -> Self {
        Self::default().with_gravity_rights(GravityRights::OncePerMatch)
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_gravity_rights(mut self, rights: GravityRights) -> Self {
        self.gravity_rights = rights;
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    #[must_use]
    pub fn with_cascade_limit(mut self, limit: usize) -> Self {
        self.cascade_limit = Some(limit);
        self
    }

    /// Smallest cap that can never be reached by a legal cascade: each
    /// non-halting iteration removes at least `REMOVAL_LENGTH` pieces.
    #[must_use]
    pub fn minimum_cascade_limit(&self) -> usize {
        self.board_size * self.board_size / REMOVAL_LENGTH + 1
    }

    /// Effective cascade iteration cap.
    #[must_use]
    pub fn effective_cascade_limit(&self) -> usize {
        self.cascade_limit
            .unwrap_or_else(|| self.minimum_cascade_limit())
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < WIN_LENGTH {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
                min: WIN_LENGTH,
            });
        }
        if self.board_size.checked_mul(self.board_size).is_none() {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
            });
        }
        if let Some(limit) = self.cascade_limit {
            let min = self.minimum_cascade_limit();
            if limit < min {
                return Err(ConfigError::CascadeLimitTooSmall { limit, min });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::new();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.gravity_rights, GravityRights::OncePerMatch);
        assert_eq!(config.first_player, Player::A);
        assert_eq!(config.effective_cascade_limit(), 13);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            MatchConfig::cascade_variant().gravity_rights,
            GravityRights::Unlimited
        );
        assert_eq!(
            MatchConfig::rights_limited().gravity_rights,
            GravityRights::OncePerMatch
        );
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_board_size(8)
            .with_first_player(Player::B)
            .with_cascade_limit(100);

        assert_eq!(config.board_size, 8);
        assert_eq!(config.first_player, Player::B);
        assert_eq!(config.effective_cascade_limit(), 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_too_small() {
        let err = MatchConfig::new().with_board_size(3).validate().unwrap_err();
        assert_eq!(err, ConfigError::BoardTooSmall { size: 3, min: 4 });
    }

    #[test]
    fn test_board_too_large() {
        let config = MatchConfig::new().with_board_size(usize::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooLarge { size: usize::MAX })
        );
    }

    #[test]
    fn test_cascade_limit_too_small() {
        let err = MatchConfig::new().with_cascade_limit(5).validate().unwrap_err();
        assert_eq!(err, ConfigError::CascadeLimitTooSmall { limit: 5, min: 13 });
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::cascade_variant().with_first_player(Player::B);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"unlimited\""));
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
