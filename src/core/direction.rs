//! Line and gravity directions.
//!
//! `Direction` is used for scanning runs; only the four forward directions
//! exist, since every run is walked from its first cell.
//!
//! `GravityDirection` names the edge pieces slide toward during compression.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// A scan direction, as a `(row, col)` delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(0, 1)`, left to right.
    Horizontal,
    /// `(1, 0)`, top to bottom.
    Vertical,
    /// `(1, 1)`, top-left to bottom-right.
    Diagonal,
    /// `(1, -1)`, top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// All scan directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row/column delta for one step forward.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// The edge that pieces are compressed toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityDirection {
    Up,
    Down,
    Left,
    Right,
}

impl GravityDirection {
    /// All gravity directions.
    pub const ALL: [GravityDirection; 4] = [
        GravityDirection::Up,
        GravityDirection::Down,
        GravityDirection::Left,
        GravityDirection::Right,
    ];

    /// True when compression runs along columns (`up`/`down`).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, GravityDirection::Up | GravityDirection::Down)
    }

    /// True when pieces pack toward index 0 of their lane (`up`/`left`).
    #[must_use]
    pub const fn toward_origin(self) -> bool {
        matches!(self, GravityDirection::Up | GravityDirection::Left)
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GravityDirection::Up => "up",
            GravityDirection::Down => "down",
            GravityDirection::Left => "left",
            GravityDirection::Right => "right",
        }
    }
}

impl std::fmt::Display for GravityDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GravityDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(GravityDirection::Up),
            "down" => Ok(GravityDirection::Down),
            "left" => Ok(GravityDirection::Left),
            "right" => Ok(GravityDirection::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
