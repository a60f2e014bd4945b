//! Side and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. Red starts at the bottom of the grid and moves up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// Both sides in index order (Red=0, Black=1)
    pub const BOTH: [Side; 2] = [Side::Red, Side::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }

    /// Returns the other side. Also used by the driver to pass the turn.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row direction a man moves in (-1 for Red, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a man of this side is crowned (0 for Red, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }

    /// Lowercase symbol of this side's men
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::Red => 'r',
            Side::Black => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Side> {
        match c.to_ascii_lowercase() {
            'r' => Some(Side::Red),
            'b' => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one square: empty, a man, or a king.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Cell {
    /// Every occupied cell kind, in Zobrist index order
    pub const PIECES: [Cell; 4] = [
        Cell::Man(Side::Red),
        Cell::King(Side::Red),
        Cell::Man(Side::Black),
        Cell::King(Side::Black),
    ];

    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Man(side) | Cell::King(side) => Some(side),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// True for a man or king of `side`.
    #[inline]
    #[must_use]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Index into per-piece tables, `None` for an empty cell.
    #[inline]
    #[must_use]
    pub(crate) const fn piece_index(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Man(side) => Some(side.index() * 2),
            Cell::King(side) => Some(side.index() * 2 + 1),
        }
    }

    /// The crowned form of a man; kings and empty cells are unchanged.
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Cell {
        match self {
            Cell::Man(side) => Cell::King(side),
            other => other,
        }
    }

    /// Parse one board symbol (`.`, `r`, `b`, `R`, `B`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'r' => Some(Cell::Man(Side::Red)),
            'b' => Some(Cell::Man(Side::Black)),
            'R' => Some(Cell::King(Side::Red)),
            'B' => Some(Cell::King(Side::Black)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Side::Red) => 'r',
            Cell::Man(Side::Black) => 'b',
            Cell::King(Side::Red) => 'R',
            Cell::King(Side::Black) => 'B',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
