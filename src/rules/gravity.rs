//! Directional compression.
//!
//! Each lane (a column for `up`/`down`, a row for `left`/`right`) is
//! compacted independently: pieces slide toward the named edge keeping
//! their relative order, and the far side is backfilled with `Empty`.
//! Compressing an already-compressed board is a no-op.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, GravityDirection, Player};

/// One piece sliding from `from` to `to` during compression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub from: Coord,
    pub to: Coord,
    pub player: Player,
}

impl PieceMove {
    /// Number of cells travelled.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from.row.abs_diff(self.to.row) + self.from.col.abs_diff(self.to.col)
    }
}

/// Coordinate of position `pos` in `lane`, where position 0 is the cell
/// touching the edge pieces fall toward.
fn lane_coord(size: usize, direction: GravityDirection, lane: usize, pos: usize) -> Coord {
    let along = if direction.toward_origin() {
        pos
    } else {
        size - 1 - pos
    };
    if direction.is_vertical() {
        Coord::new(along, lane)
    } else {
        Coord::new(lane, along)
    }
}

/// Slide every piece toward `direction`'s edge.
///
/// Returns a move for each piece whose position changed, lane by lane,
/// nearest-to-edge first.
pub fn compress(board: &mut Board, direction: GravityDirection) -> Vec<PieceMove> {
    let size = board.size();
    let mut moves = Vec::new();

    for lane in 0..size {
        let mut write = 0;
        for read in 0..size {
            let from = lane_coord(size, direction, lane, read);
            let Cell::Occupied(player) = board.get(from) else {
                continue;
            };
            if read != write {
                let to = lane_coord(size, direction, lane, write);
                board.set(to, Cell::Occupied(player));
                board.set(from, Cell::Empty);
                moves.push(PieceMove { from, to, player });
            }
            write += 1;
        }
    }

    moves
}
