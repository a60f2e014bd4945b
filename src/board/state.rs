use super::{Cell, Side, Square, BOARD_SIZE};
use crate::zobrist::cell_key;

/// An 8x8 checkers position.
///
/// Boards are value objects: every transition returns a fresh copy and the
/// original is never touched. The Zobrist `hash` is kept in step with the
/// grid, so two boards with identical grids always share a fingerprint.
///
/// Move generation, evaluation and search assume a well-formed grid. Use
/// [`Board::from_text`] to build one from untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) hash: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            hash: 0,
        }
    }

    /// Build a board from a complete grid.
    #[must_use]
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Board { cells, hash: 0 };
        board.hash = board.calculate_hash();
        board
    }

    /// The standard opening layout: black men on the dark squares of rows
    /// 0-2, red men on rows 5-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            if (sq.row() + sq.col()) % 2 == 1 {
                match sq.row() {
                    0..=2 => board.set(sq, Cell::Man(Side::Black)),
                    5..=7 => board.set(sq, Cell::Man(Side::Red)),
                    _ => {}
                }
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row()][sq.col()]
    }

    /// Place `cell` on `sq`, keeping the fingerprint in step.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        let old = self.cells[sq.row()][sq.col()];
        self.hash ^= cell_key(old, sq) ^ cell_key(cell, sq);
        self.cells[sq.row()][sq.col()] = cell;
    }

    /// Content-derived fingerprint used as the value cache key.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recompute the fingerprint from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        Square::all().fold(0, |acc, sq| acc ^ cell_key(self.get(sq), sq))
    }

    /// Rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of `cell` symbols on the board.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Men and kings belonging to `side`.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.count(Cell::Man(side)) + self.count(Cell::King(side))
    }

    /// Squares occupied by `side`, in row-major order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq).belongs_to(side))
    }
}
