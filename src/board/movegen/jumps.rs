use super::super::{Board, Cell, Move, Side, Square};

const KING_JUMP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const RED_MAN_JUMP_DIRS: [(isize, isize); 2] = [(-1, 1), (-1, -1)];
const BLACK_MAN_JUMP_DIRS: [(isize, isize); 2] = [(1, 1), (1, -1)];

impl Board {
    /// Every capture chain the piece on `from` can make, depth first.
    ///
    /// Each prefix of a longer chain is reported as a move of its own, ahead
    /// of its extensions. A chain never lands on a square already in it.
    #[must_use]
    pub fn jump_chains(&self, from: Square, side: Side) -> Vec<Move> {
        let mut chains = Vec::new();
        let mut path = vec![from];
        self.collect_jumps(from, side, &mut path, &mut chains);
        chains
    }

    /// Capture chains for every piece of `side`, pieces in row-major order.
    #[must_use]
    pub fn all_jumps(&self, side: Side) -> Vec<Move> {
        self.squares_of(side)
            .flat_map(|from| self.jump_chains(from, side))
            .collect()
    }

    fn collect_jumps(&self, from: Square, side: Side, path: &mut Vec<Square>, out: &mut Vec<Move>) {
        let piece = self.get(from);
        let dirs: &[(isize, isize)] = if piece.is_king() {
            &KING_JUMP_DIRS
        } else if side == Side::Red {
            &RED_MAN_JUMP_DIRS
        } else {
            &BLACK_MAN_JUMP_DIRS
        };

        for &(dr, dc) in dirs {
            let Some(landing) = from.offset(dr * 2, dc * 2) else {
                continue;
            };
            if !self.get(landing).is_empty() {
                continue;
            }
            let jumped = from.midpoint(landing);
            if !self.get(jumped).belongs_to(side.opponent()) || path.contains(&landing) {
                continue;
            }

            path.push(landing);
            out.push(Move::Jump(path.clone()));

            // Continue from the landing square without crowning mid-chain.
            let mut next = self.clone();
            next.set(landing, piece);
            next.set(from, Cell::Empty);
            next.set(jumped, Cell::Empty);
            next.collect_jumps(landing, side, path, out);

            path.pop();
        }
    }
}
