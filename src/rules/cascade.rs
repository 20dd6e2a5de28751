//! Cascade resolution: scan → remove → compress until the board settles.
//!
//! ## Entry points
//!
//! - **Placement**: set one cell, scan once. A winning run ends the match
//!   and nothing is removed. Otherwise exact triples are removed in a single
//!   pass with no re-scan.
//! - **Gravity**: compress, then loop: scan; stop on a winner; stop when
//!   nothing is removable; otherwise remove, compress again in the *same*
//!   direction, and repeat.
//!
//! Both paths run the same state machine; `CascadePolicy` decides what
//! follows a removal.
//!
//! ## Termination
//!
//! Every iteration that does not halt clears at least three pieces, so a
//! gravity cascade scans at most `cells / 3 + 1` times. Exceeding the
//! resolver's limit is a logic defect and panics.
//!
//! ## Steps
//!
//! Each removal and each compression is recorded as a `CascadeStep` so a
//! presentation layer can replay the transitions at its own pace.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gravity::{compress, PieceMove};
use super::outcome::MatchOutcome;
use super::remover::remove;
use super::scanner::{scan, Run, REMOVAL_LENGTH};
use crate::core::{Board, Cell, Coord, GravityDirection, Player};

/// What happens after exact triples are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadePolicy {
    /// Remove once and stop (placement path).
    SinglePass,
    /// Compress toward `direction` and rescan until settled (gravity path).
    UntilStable { direction: GravityDirection },
}

/// Resolver state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeState {
    Scanning,
    Removing(Vec<Coord>),
    Compressing(GravityDirection),
    Terminal(MatchOutcome),
}

/// One discrete board transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeStep {
    /// Pieces slid toward an edge.
    Compressed {
        direction: GravityDirection,
        moves: Vec<PieceMove>,
    },
    /// Exact-triple cells were cleared (row-major order).
    Removed { cells: Vec<Coord> },
}

impl CascadeStep {
    /// Cells cleared by this step; empty for a compression.
    #[must_use]
    pub fn removed(&self) -> &[Coord] {
        match self {
            CascadeStep::Removed { cells } => cells,
            CascadeStep::Compressed { .. } => &[],
        }
    }
}

/// Result of running the resolver on a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Transitions in the order they were applied.
    pub steps: Vec<CascadeStep>,

    /// Terminal outcome reached by a winning scan, if any.
    pub outcome: Option<MatchOutcome>,

    /// Winning runs found by the terminal scan.
    pub winning_runs: Vec<Run>,

    /// Number of scans performed.
    pub scans: usize,
}

impl Resolution {
    /// All cleared cells across every removal step.
    pub fn removed_cells(&self) -> impl Iterator<Item = &Coord> {
        self.steps.iter().flat_map(CascadeStep::removed)
    }

    /// Number of removal steps (chain length).
    #[must_use]
    pub fn chain_length(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, CascadeStep::Removed { .. }))
            .count()
    }
}

/// Runs placement and gravity resolution against a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeResolver {
    limit: usize,
}

impl CascadeResolver {
    /// Create a resolver that panics after `limit` scans.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        assert!(limit > 0, "Cascade limit must be positive");
        Self { limit }
    }

    /// Create a resolver with the tightest safe limit for `board`.
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.cell_count() / REMOVAL_LENGTH + 1)
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Place `player` at an empty `coord` and resolve the single pass.
    pub fn place(&self, board: &mut Board, coord: Coord, player: Player) -> Resolution {
        debug_assert!(board.get(coord).is_empty(), "placement on occupied cell {coord}");
        board.set(coord, Cell::Occupied(player));
        self.settle(board, CascadePolicy::SinglePass)
    }

    /// Compress toward `direction` and cascade until stable or terminal.
    pub fn gravity(&self, board: &mut Board, direction: GravityDirection) -> Resolution {
        let moves = compress(board, direction);
        debug!(%direction, moved = moves.len(), "gravity compression");

        let mut resolution = self.settle(board, CascadePolicy::UntilStable { direction });
        resolution
            .steps
            .insert(0, CascadeStep::Compressed { direction, moves });
        resolution
    }

    /// Run the scan/remove/compress state machine from `Scanning`.
    pub fn settle(&self, board: &mut Board, policy: CascadePolicy) -> Resolution {
        let mut resolution = Resolution::default();
        let mut state = CascadeState::Scanning;

        loop {
            state = match state {
                CascadeState::Scanning => {
                    resolution.scans += 1;
                    assert!(
                        resolution.scans <= self.limit,
                        "cascade exceeded {} scans without settling:\n{board}",
                        self.limit
                    );

                    let classification = scan(board);
                    if let Some(outcome) = MatchOutcome::from_winners(&classification.winners) {
                        resolution.winning_runs = classification.winning_runs;
                        CascadeState::Terminal(outcome)
                    } else if classification.removable.is_empty() {
                        break;
                    } else {
                        CascadeState::Removing(classification.removable_sorted())
                    }
                }
                CascadeState::Removing(cells) => {
                    let cleared = remove(board, &cells);
                    debug!(scan = resolution.scans, cleared, "removed exact triples");
                    resolution.steps.push(CascadeStep::Removed { cells });

                    match policy {
                        CascadePolicy::SinglePass => break,
                        CascadePolicy::UntilStable { direction } => {
                            CascadeState::Compressing(direction)
                        }
                    }
                }
                CascadeState::Compressing(direction) => {
                    let moves = compress(board, direction);
                    debug!(%direction, moved = moves.len(), "cascade compression");
                    resolution
                        .steps
                        .push(CascadeStep::Compressed { direction, moves });
                    CascadeState::Scanning
                }
                CascadeState::Terminal(outcome) => {
                    resolution.outcome = Some(outcome);
                    break;
                }
            };
        }

        resolution
    }
}
