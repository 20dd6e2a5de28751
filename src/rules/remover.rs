//! Clears classified cells.

use crate::core::{Board, Cell, Coord};

/// Set every listed cell to `Empty`.
///
/// Returns how many pieces were actually cleared; already-empty cells are
/// a no-op and not counted.
pub fn remove<'a>(board: &mut Board, cells: impl IntoIterator<Item = &'a Coord>) -> usize {
    let mut cleared = 0;
    for &coord in cells {
        if !board.get(coord).is_empty() {
            board.set(coord, Cell::Empty);
            cleared += 1;
        }
    }
    cleared
}
