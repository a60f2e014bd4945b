//! Move generation.
//!
//! Captures are mandatory at the level of the whole move set: if any piece
//! of the side to move can jump, only jump chains are legal. Every prefix of
//! a multi-jump chain counts as a separate legal move.

mod jumps;
mod steps;

use super::{Board, Move, Side};

impl Board {
    /// Legal moves for `side`: all jump chains if there are any, otherwise
    /// the simple steps.
    #[must_use]
    pub fn generate_moves(&self, side: Side) -> Vec<Move> {
        let jumps = self.all_jumps(side);
        if jumps.is_empty() {
            self.simple_moves(side)
        } else {
            jumps
        }
    }

    /// Boards reachable by one move of `side`, in generation order. Empty
    /// when `side` has no legal move.
    #[must_use]
    pub fn successors(&self, side: Side) -> Vec<Board> {
        self.generate_moves(side)
            .iter()
            .map(|mv| self.apply_move(mv))
            .collect()
    }

    /// True if `side` has at least one legal move.
    #[must_use]
    pub fn has_moves(&self, side: Side) -> bool {
        !self.generate_moves(side).is_empty()
    }
}
