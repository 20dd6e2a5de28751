//! Rule primitives and the cascade resolver.
//!
//! - `scanner`: classify runs (win / removable triple)
//! - `remover`: clear classified cells
//! - `gravity`: directional compression
//! - `cascade`: placement and gravity resolution over the primitives
//! - `outcome`: terminal outcome and its tie-break
//!
//! Everything here is pure with respect to the board passed in; turn
//! order and gravity rights live in `game`.

pub mod scanner;
pub mod remover;
pub mod gravity;
pub mod cascade;
pub mod outcome;

pub use scanner::{is_run_start, runs, scan, Run, RunClassification, REMOVAL_LENGTH, WIN_LENGTH};
pub use remover::remove;
pub use gravity::{compress, PieceMove};
pub use cascade::{CascadePolicy, CascadeResolver, CascadeState, CascadeStep, Resolution};
pub use outcome::{DrawReason, MatchOutcome};
