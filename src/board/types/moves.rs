//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single move for one piece.
///
/// A `Simple` move is a one-square diagonal step. A `Jump` is an ordered chain
/// of at least two squares, each consecutive pair being a two-square capture
/// hop; no square appears twice in one chain.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Simple { from: Square, to: Square },
    Jump(Vec<Square>),
}

impl Move {
    /// Square the moving piece starts on
    ///
    /// # Panics
    ///
    /// Panics on a `Jump` with an empty path. Generated chains always hold at
    /// least two squares.
    #[must_use]
    pub fn from(&self) -> Square {
        match self {
            Move::Simple { from, .. } => *from,
            Move::Jump(path) => path[0],
        }
    }

    /// Square the moving piece ends on
    ///
    /// # Panics
    ///
    /// Panics on a `Jump` with an empty path.
    #[must_use]
    pub fn to(&self) -> Square {
        match self {
            Move::Simple { to, .. } => *to,
            Move::Jump(path) => path[path.len() - 1],
        }
    }

    #[inline]
    #[must_use]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(_))
    }

    /// Number of pieces this move captures.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        match self {
            Move::Simple { .. } => 0,
            Move::Jump(path) => path.len().saturating_sub(1),
        }
    }

    /// Consecutive `(start, end)` hops making up this move, in order.
    pub fn hops(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        let path: &[Square] = match self {
            Move::Simple { from, to } => return Hops::Simple(Some((*from, *to))),
            Move::Jump(path) => path,
        };
        Hops::Chain(path.windows(2))
    }
}

enum Hops<'a> {
    Simple(Option<(Square, Square)>),
    Chain(std::slice::Windows<'a, Square>),
}

impl Iterator for Hops<'_> {
    type Item = (Square, Square);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Hops::Simple(hop) => hop.take(),
            Hops::Chain(windows) => windows.next().map(|pair| (pair[0], pair[1])),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { from, to } => write!(f, "{from}-{to}"),
            Move::Jump(path) => {
                for (i, sq) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{sq}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_move_hops() {
        let mv = Move::Simple {
            from: Square(5, 0),
            to: Square(4, 1),
        };
        let hops: Vec<_> = mv.hops().collect();
        assert_eq!(hops, vec![(Square(5, 0), Square(4, 1))]);
        assert_eq!(mv.capture_count(), 0);
        assert!(!mv.is_jump());
    }

    #[test]
    fn test_jump_chain_hops() {
        let mv = Move::Jump(vec![Square(6, 1), Square(4, 3), Square(2, 5)]);
        let hops: Vec<_> = mv.hops().collect();
        assert_eq!(
            hops,
            vec![(Square(6, 1), Square(4, 3)), (Square(4, 3), Square(2, 5))]
        );
        assert_eq!(mv.from(), Square(6, 1));
        assert_eq!(mv.to(), Square(2, 5));
        assert_eq!(mv.capture_count(), 2);
    }

    #[test]
    #[should_panic]
    fn test_empty_chain_has_no_start() {
        let _ = Move::Jump(Vec::new()).from();
    }

    #[test]
    fn test_empty_chain_captures_nothing() {
        let mv = Move::Jump(Vec::new());
        assert_eq!(mv.capture_count(), 0);
        assert_eq!(mv.hops().count(), 0);
    }

    #[test]
    fn test_display() {
        let mv = Move::Jump(vec![Square(2, 3), Square(4, 5)]);
        assert_eq!(mv.to_string(), "(2,3)x(4,5)");
    }
}
