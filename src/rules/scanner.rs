//! Line scanning and run classification.
//!
//! Every maximal same-symbol run along the four scan directions is found
//! exactly once: a cell starts a run in direction `d` only if the cell
//! one step behind it (along `d`) is off the board or holds something
//! else. The walk then extends forward until the symbol changes.
//!
//! Classification:
//! - length ≥ `WIN_LENGTH` (4): the symbol wins.
//! - length == `REMOVAL_LENGTH` (3): every member cell is removable.
//! - anything else: ignored. Long runs are never split into triples.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Coord, Direction, Player};

/// Minimum run length that wins.
pub const WIN_LENGTH: usize = 4;

/// Exact run length that is removed.
pub const REMOVAL_LENGTH: usize = 3;

/// A maximal run of one player's pieces along a scan direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub player: Player,
    /// First cell of the run (the one with no same-symbol predecessor).
    pub start: Coord,
    pub direction: Direction,
    pub len: usize,
}

impl Run {
    /// Member coordinates from `start` forward.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..self.len as isize).map(move |i| {
            Coord::new(
                (self.start.row as isize + dr * i) as usize,
                (self.start.col as isize + dc * i) as usize,
            )
        })
    }

    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.len >= WIN_LENGTH
    }

    #[must_use]
    pub fn is_removable(&self) -> bool {
        self.len == REMOVAL_LENGTH
    }
}

/// Result of one scan: who has a winning run and which cells vanish.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunClassification {
    /// Players with at least one winning run, in seat order, no duplicates.
    pub winners: SmallVec<[Player; 2]>,

    /// Cells belonging to some run of exactly `REMOVAL_LENGTH`.
    pub removable: FxHashSet<Coord>,

    /// Every winning run, for highlighting.
    pub winning_runs: Vec<Run>,
}

impl RunClassification {
    #[must_use]
    pub fn has_winner(&self) -> bool {
        !self.winners.is_empty()
    }

    /// Nothing to win and nothing to remove.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.winners.is_empty() && self.removable.is_empty()
    }

    /// Removable cells in row-major order.
    #[must_use]
    pub fn removable_sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.removable.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    fn add_winner(&mut self, player: Player) {
        if !self.winners.contains(&player) {
            self.winners.push(player);
            self.winners.sort_unstable();
        }
    }
}

/// True if `coord` begins a run along `direction`.
///
/// Empty cells never start a run.
#[must_use]
pub fn is_run_start(board: &Board, coord: Coord, direction: Direction) -> bool {
    let cell = board.get(coord);
    if cell.is_empty() {
        return false;
    }
    match board.offset(coord, direction, -1) {
        Some(prev) => board.get(prev) != cell,
        None => true,
    }
}

fn walk(board: &Board, start: Coord, direction: Direction, player: Player) -> Run {
    let mut len = 0;
    let mut cursor = Some(start);
    while let Some(coord) = cursor {
        if board.get(coord).player() != Some(player) {
            break;
        }
        len += 1;
        cursor = board.offset(coord, direction, 1);
    }
    assert!(len > 0, "run starting at {start} has zero length");

    Run {
        player,
        start,
        direction,
        len,
    }
}

/// Every maximal run on the board, including single pieces.
///
/// Ordered by start cell (row-major), then by scan direction.
#[must_use]
pub fn runs(board: &Board) -> Vec<Run> {
    let mut out = Vec::new();
    for (coord, cell) in board.cells() {
        let Some(player) = cell.player() else {
            continue;
        };
        for direction in Direction::ALL {
            if is_run_start(board, coord, direction) {
                out.push(walk(board, coord, direction, player));
            }
        }
    }
    out
}

/// Classify every run on the board. Pure and deterministic.
#[must_use]
pub fn scan(board: &Board) -> RunClassification {
    let mut result = RunClassification::default();

    for run in runs(board) {
        if run.is_winning() {
            result.add_winner(run.player);
            result.winning_runs.push(run);
        } else if run.is_removable() {
            result.removable.extend(run.cells());
        }
    }

    result
}
