//! Square type and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, col) with row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, row-major)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * BOARD_SIZE + self.1
    }

    /// The square `(dr, dc)` away, or `None` if that falls off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0.checked_add_signed(dr)?;
        let col = self.1.checked_add_signed(dc)?;
        Square::new(row, col)
    }

    /// Midpoint between two squares two diagonals apart (the jumped square).
    #[inline]
    #[must_use]
    pub const fn midpoint(self, other: Square) -> Square {
        Square((self.0 + other.0) / 2, (self.1 + other.1) / 2)
    }

    /// Iterate all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(3, 3).offset(-2, 2), Some(Square(1, 5)));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Square(2, 3).midpoint(Square(4, 5)), Square(3, 4));
        assert_eq!(Square(5, 2).midpoint(Square(3, 0)), Square(4, 1));
    }

    #[test]
    fn test_all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square(0, 0));
        assert_eq!(squares[9], Square(1, 1));
        assert!(squares.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }
}
