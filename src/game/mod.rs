//! Turn and match control over the rule primitives.
//!
//! - `Match`: one match; validates intents, runs the resolver, tracks
//!   turns, gravity rights and the terminal outcome
//! - `Session`: consecutive matches with a scoreboard

pub mod intent;
pub mod turn;
pub mod controller;
pub mod session;

pub use intent::{Intent, IntentRecord};
pub use turn::TurnState;
pub use controller::{Match, MatchSnapshot, TurnReport};
pub use session::{Scoreboard, Session};
