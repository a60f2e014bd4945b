//! Board transitions.
//!
//! Every transition copies the board; the source board is never modified.

use super::{Board, Cell, Move, Square};

impl Board {
    /// Move the piece on `start` to `end` in a copy of this board.
    ///
    /// A hop spanning two rows is a capture and clears the jumped square. A man
    /// landing on its promotion row is crowned. Kings are never demoted.
    #[must_use]
    pub fn apply_hop(&self, start: Square, end: Square) -> Board {
        let mut next = self.clone();
        let piece = next.get(start);
        next.set(end, piece);
        next.set(start, Cell::Empty);

        if start.row().abs_diff(end.row()) == 2 {
            next.set(start.midpoint(end), Cell::Empty);
        }

        if let Cell::Man(side) = piece {
            if end.row() == side.promotion_row() {
                next.set(end, piece.crowned());
            }
        }
        next
    }

    /// Apply a whole move by folding [`Board::apply_hop`] over its hops in order.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut hops = mv.hops();
        let Some((start, end)) = hops.next() else {
            return self.clone();
        };
        let first = self.apply_hop(start, end);
        hops.fold(first, |board, (start, end)| board.apply_hop(start, end))
    }
}
