//! Core types: players, the board, directions, configuration.
//!
//! These are the data the rule primitives in `rules` operate on.

pub mod player;
pub mod board;
pub mod direction;
pub mod config;

pub use player::{Player, PlayerMap};
pub use board::{Board, Cell, Coord, STANDARD_SIZE};
pub use direction::{Direction, GravityDirection};
pub use config::{GravityRights, MatchConfig};
