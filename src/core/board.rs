//! The square game grid.
//!
//! A `Board` holds exactly one `Cell` for every coordinate in
//! `0..size × 0..size`; `Empty` is a first-class value, not a hole.
//! Cells are stored row-major inline (`SmallVec`), so the standard 6×6
//! board never touches the heap and clones cheaply for snapshots.
//!
//! Indexing out of bounds is a programming error and panics. Arithmetic
//! that may walk off the edge (scanning) goes through `in_bounds`/`offset`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::direction::Direction;
use super::player::Player;
use crate::error::ParseBoardError;

/// Side length of the standard board.
pub const STANDARD_SIZE: usize = 6;

/// Contents of one grid square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    /// Text symbol: `.`, `X` or `O`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(p) => p.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// A `(row, col)` position. Ordered row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

type Cells = SmallVec<[Cell; STANDARD_SIZE * STANDARD_SIZE]>;

/// Square grid of cells.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Cells,
}

/// Unchecked wire form of `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Cells,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ParseBoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if repr.size == 0 {
            return Err(ParseBoardError::Empty);
        }
        if repr.size.checked_mul(repr.size) != Some(repr.cells.len()) {
            return Err(ParseBoardError::CellCount {
                size: repr.size,
                count: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create an empty `size × size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");

        Self {
            size,
            cells: SmallVec::from_elem(Cell::Empty, size * size),
        }
    }

    /// Create an empty 6×6 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_SIZE)
    }

    /// Parse a board from one string per row (see `FromStr`).
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        rows.join("\n").parse()
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check whether signed coordinates fall on the board.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Check whether a coordinate falls on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Move `steps` cells from `coord` along `dir` (negative steps go
    /// backward). Returns `None` when the result is off the board.
    #[must_use]
    pub fn offset(&self, coord: Coord, dir: Direction, steps: isize) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = coord.row as isize + dr * steps;
        let col = coord.col as isize + dc * steps;
        self.in_bounds(row, col)
            .then(|| Coord::new(row as usize, col as usize))
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {0}x{0} board",
            self.size
        );
        coord.row * self.size + coord.col
    }

    /// Read a cell. Panics when out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Write a cell. Panics when out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Visit every cell in row-major order.
    pub fn for_each_cell(&self, mut f: impl FnMut(Coord, Cell)) {
        for (coord, cell) in self.cells() {
            f(coord, cell);
        }
    }

    /// Iterate `(Coord, Cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / size, i % size), cell))
    }

    /// Iterate coordinates of empty cells in row-major order.
    pub fn empty_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
    }

    /// Number of pieces belonging to `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {0}x{0}", self.size)?;
        write!(f, "{self}")
    }
}

/// Rows are separated by newlines or `/`; blank rows are skipped.
/// `.` is empty, `X`/`O` are pieces.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size);

        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(ParseBoardError::NotSquare { row: r, width, size });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    _ => Player::from_symbol(ch)
                        .map(Cell::Occupied)
                        .ok_or(ParseBoardError::UnknownSymbol { symbol: ch, row: r, col: c })?,
                };
                board.set(Coord::new(r, c), cell);
            }
        }

        Ok(board)
    }
}
