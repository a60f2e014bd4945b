//! Position evaluation.
//!
//! [`Board::utility`] is the value the search propagates. [`Board::evaluate`]
//! is a cheaper positional guess used only to order successors.

use super::{Board, Cell, Side, Square};

/// Utility of a decided game, before the depth adjustment.
pub const WIN_SCORE: i32 = 1_000_000;

/// Squares rewarded by the ordering heuristic.
const CENTER_SQUARES: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

struct Material {
    men: i32,
    kings: i32,
}

impl Material {
    fn of(board: &Board, side: Side) -> Self {
        Material {
            men: board.count(Cell::Man(side)) as i32,
            kings: board.count(Cell::King(side)) as i32,
        }
    }

    fn total(&self) -> i32 {
        self.men + self.kings
    }
}

impl Board {
    /// Utility of this position for `side`, `depth` plies from the search horizon.
    ///
    /// If the opponent has no pieces or no legal move the result is
    /// `WIN_SCORE - depth`; if `side` is in that situation it is
    /// `-WIN_SCORE + depth`. The opponent's case is checked first. Otherwise
    /// it is material: men count 1 and kings 2.
    #[must_use]
    pub fn utility(&self, side: Side, depth: i32) -> i32 {
        let opp = side.opponent();
        let ours = Material::of(self, side);
        let theirs = Material::of(self, opp);

        if theirs.total() == 0 || !self.has_moves(opp) {
            return WIN_SCORE - depth;
        }
        if ours.total() == 0 || !self.has_moves(side) {
            return -WIN_SCORE + depth;
        }

        (ours.men + 2 * ours.kings) - (theirs.men + 2 * theirs.kings)
    }

    /// Ordering heuristic for `side`, in half-point units.
    ///
    /// Men count 1, kings 2.5, and each centre square held by `side` (or by
    /// the opponent) moves the score by +2 (or -2). Everything is doubled so
    /// the 2.5 king weight stays integral.
    #[must_use]
    pub fn evaluate(&self, side: Side) -> i32 {
        let opp = side.opponent();
        let ours = Material::of(self, side);
        let theirs = Material::of(self, opp);

        let center: i32 = CENTER_SQUARES
            .iter()
            .map(|&sq| match self.get(sq).side() {
                Some(s) if s == side => 1,
                Some(_) => -1,
                None => 0,
            })
            .sum();

        2 * (ours.men - theirs.men) + 5 * (ours.kings - theirs.kings) + 4 * center
    }
}
