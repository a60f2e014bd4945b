//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than writing out grids.
//!
//! # Example
//! ```
//! use checkers_solver::board::{BoardBuilder, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(2, 3), Side::Red)
//!     .man(Square(3, 4), Side::Black)
//!     .king(Square(7, 0), Side::Black)
//!     .build();
//! assert_eq!(board.piece_count(Side::Black), 2);
//! ```

use super::{Board, Cell, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Cell)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Square::all()
            .map(|sq| (sq, board.get(sq)))
            .filter(|(_, cell)| !cell.is_empty())
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a cell on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, cell: Cell) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, cell));
        self
    }

    /// Place an uncrowned piece.
    #[must_use]
    pub fn man(self, square: Square, side: Side) -> Self {
        self.piece(square, Cell::Man(side))
    }

    /// Place a king.
    #[must_use]
    pub fn king(self, square: Square, side: Side) -> Self {
        self.piece(square, Cell::King(side))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, cell) in self.pieces {
            board.set(sq, cell);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_new() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .man(Square(4, 4), Side::Red)
            .king(Square(4, 4), Side::Black)
            .build();
        assert_eq!(board.get(Square(4, 4)), Cell::King(Side::Black));
        assert_eq!(board.piece_count(Side::Red), 0);
    }

    #[test]
    fn test_clear_removes_piece() {
        let board = BoardBuilder::starting_position()
            .clear(Square(5, 0))
            .build();
        assert_eq!(board.piece_count(Side::Red), 11);
        assert_eq!(board.hash(), board.calculate_hash());
    }
}
