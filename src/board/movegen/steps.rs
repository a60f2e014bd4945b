use super::super::{Board, Move, Side};

impl Board {
    /// One-square diagonal steps into empty squares for every piece of `side`.
    ///
    /// Men step forward only; kings step in all four diagonals. Pieces are
    /// visited row-major, and for each piece the left diagonal comes before the
    /// right one (kings: upward pair first).
    #[must_use]
    pub fn simple_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.squares_of(side) {
            let row_dirs: &[isize] = if self.get(from).is_king() {
                &[-1, 1]
            } else if side == Side::Red {
                &[-1]
            } else {
                &[1]
            };
            for &dr in row_dirs {
                for dc in [-1, 1] {
                    let Some(to) = from.offset(dr, dc) else {
                        continue;
                    };
                    if self.get(to).is_empty() {
                        moves.push(Move::Simple { from, to });
                    }
                }
            }
        }
        moves
    }
}
